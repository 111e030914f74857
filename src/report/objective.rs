// src/report/objective.rs
//
// Objective function parsing over the page's visible text.
// Declaration: "F(X) = 3x1 + 5x2 → max"  → {x1: 3, x2: 5}
// Answer:      "F(X) = 3*2 + 5*6 = 36"   → result line

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::FALLBACK_RESULT;
use crate::core::sanitize::normalize_ws;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"F\(X\)\s*=\s*([0-9+\-*x\s]+)").expect("declaration pattern")
});

static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*x([0-9]+)").expect("term pattern")
});

// The middle part excludes `x`, so the declaration itself never matches.
static ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"F\(X\)\s*=\s*[0-9+\-*/.,\s]+?\s*=\s*-?[0-9]+(?:[.,][0-9]+)?").expect("answer pattern")
});

/// Variable name (`x<N>`) → objective coefficient.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coefficients(BTreeMap<String, u64>);

impl Coefficients {
    /// Coefficient of `var`, 0 when the objective does not mention it.
    pub fn get(&self, var: &str) -> u64 {
        self.0.get(var).copied().unwrap_or(0)
    }

    /// Coefficient of `x<index>`.
    pub fn for_index(&self, index: usize) -> u64 {
        self.get(&format!("x{index}"))
    }

    pub fn contains(&self, var: &str) -> bool {
        self.0.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries ordered by variable index (x2 before x10).
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut v: Vec<(&str, u64)> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        v.sort_by_key(|(k, _)| (var_index(k), *k));
        v
    }
}

fn var_index(var: &str) -> u64 {
    var.trim_start_matches('x').parse().unwrap_or(u64::MAX)
}

impl FromIterator<(String, u64)> for Coefficients {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.sorted().iter().map(|(k, v)| format!("{k} = {v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

/// Build the coefficient map from the first objective declaration in `text`.
/// `None` when the page declares no objective.
pub fn extract_coefficients(text: &str) -> Option<Coefficients> {
    let caps = DECLARATION.captures(text)?;
    let expr = caps.get(1)?.as_str();

    let mut map = BTreeMap::new();
    for term in TERM.captures_iter(expr) {
        let Ok(coef) = term[1].parse::<u64>() else { continue };
        map.insert(format!("x{}", &term[2]), coef);
    }
    Some(Coefficients(map))
}

/// The paragraph closing each rendered report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultText {
    /// Evaluated objective, e.g. `F(X) = 3*2 + 5*6 = 36`.
    Equation(String),
    /// No evaluated objective on the page.
    Fallback,
}

impl ResultText {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResultText::Fallback)
    }
}

impl fmt::Display for ResultText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultText::Equation(s) => f.write_str(s),
            ResultText::Fallback => f.write_str(FALLBACK_RESULT),
        }
    }
}

/// Last evaluated objective equation in `text` (the final answer).
pub fn extract_result(text: &str) -> ResultText {
    match ANSWER.find_iter(text).last() {
        Some(m) => ResultText::Equation(normalize_ws(m.as_str())),
        None => ResultText::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_from_declaration() {
        let c = extract_coefficients("Целевая функция: F(X) = 3x1 + 5x2 → max").unwrap();
        assert_eq!(c.get("x1"), 3);
        assert_eq!(c.get("x2"), 5);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get("x3"), 0);
    }

    #[test]
    fn no_declaration_is_none() {
        assert_eq!(extract_coefficients("G(Y) = 3y1"), None);
        assert_eq!(extract_coefficients(""), None);
    }

    #[test]
    fn first_declaration_wins_and_later_terms_overwrite() {
        let c = extract_coefficients("F(X) = 2x1 + 4x1 + 7 x3 ; F(X) = 9x1").unwrap();
        assert_eq!(c.get("x1"), 4);
        assert_eq!(c.get("x3"), 7);
    }

    #[test]
    fn bare_variables_carry_no_coefficient() {
        // Only "<digits>x<digits>" pairs count.
        let c = extract_coefficients("F(X) = x1 + 2x2").unwrap();
        assert!(!c.contains("x1"));
        assert_eq!(c.get("x2"), 2);
    }

    #[test]
    fn display_orders_by_index() {
        let c: Coefficients = [(s!("x10"), 1), (s!("x2"), 5), (s!("x1"), 3)].into_iter().collect();
        assert_eq!(c.to_string(), "x1 = 3, x2 = 5, x10 = 1");
    }

    #[test]
    fn result_takes_last_equation() {
        let text = "F(X) = 3x1 + 5x2 → max ... F(X) = 3*0 + 5*4 = 20 ... \
                    Ответ: F(X) = 3*2 + 5*6 = 36";
        assert_eq!(extract_result(text), ResultText::Equation(s!("F(X) = 3*2 + 5*6 = 36")));
    }

    #[test]
    fn result_falls_back_to_fixed_message() {
        let r = extract_result("F(X) = 3x1 + 5x2 → max");
        assert!(r.is_fallback());
        assert_eq!(r.to_string(), FALLBACK_RESULT);
    }
}
