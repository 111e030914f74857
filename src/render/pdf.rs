// src/render/pdf.rs
// A4 PDF: title, tables as a monospaced grid, result paragraph.
// Builtin PDF fonts only cover WinAnsi (Latin) text; anything else needs a TrueType font.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use printpdf::*;

use crate::error::{ReportError, Result};
use crate::report::Report;
use crate::table::Table;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 15.0;
const PT_MM: f32 = 0.352_778;

const TITLE_PT: f32 = 14.0;
const TEXT_PT: f32 = 10.0;
const GRID_PT: f32 = 9.0;
const MIN_GRID_PT: f32 = 5.0;

// Average advance widths, in em
const MONO_EM: f32 = 0.6;
const TEXT_EM: f32 = 0.5;

const CELL_PAD: usize = 2;

// WinAnsi characters outside Latin-1
const WIN_ANSI_EXTRA: &[char] = &[
    '\u{20AC}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{017D}', '\u{2018}',
    '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}', '\u{02DC}',
    '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{017E}', '\u{0178}',
];
const LEADING: f32 = 1.5;

struct Fonts {
    text: IndirectFontRef,
    bold: IndirectFontRef,
    mono: IndirectFontRef,
    mono_bold: IndirectFontRef,
}

/// Writing position; starts a new page when the next line would cross the bottom margin.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl Cursor<'_> {
    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.pages += 1;
            let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), format!("Layer {}", self.pages));
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_H - MARGIN;
        }
        self.y -= height;
    }

    fn text(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn paragraph(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        let per_line = ((PAGE_W - 2.0 * MARGIN) / (size * TEXT_EM * PT_MM)) as usize;
        for line in wrap_text(text, per_line.max(1)) {
            self.advance(size * PT_MM * LEADING);
            self.text(&line, size, MARGIN, font);
        }
    }
}

pub fn render_document(report: &Report, font: Option<&Path>) -> Result<Vec<u8>> {
    if font.is_none() {
        if let Some(text) = builtin_unsupported(report) {
            return Err(ReportError::NeedsFont { text });
        }
    }

    let title = report.name();
    let (doc, page1, layer1) = PdfDocument::new(&title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let fonts = load_fonts(&doc, font)?;

    {
        let mut cur = Cursor {
            doc: &doc,
            layer: doc.get_page(page1).get_layer(layer1),
            y: PAGE_H - MARGIN,
            pages: 1,
        };

        cur.paragraph(&title, TITLE_PT, &fonts.bold);
        cur.y -= TEXT_PT * PT_MM;

        for table in &report.tables {
            draw_table(&mut cur, &fonts, table);
            cur.y -= GRID_PT * PT_MM * LEADING;
        }

        cur.paragraph(&report.result.to_string(), TEXT_PT, &fonts.text);
        logd!("PDF: {} table(s) over {} page(s)", report.tables.len(), cur.pages);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf).map_err(|e| ReportError::Pdf(e.to_string()))?;
    buf.into_inner().map_err(|e| ReportError::Pdf(e.to_string()))
}

fn load_fonts(doc: &PdfDocumentReference, font: Option<&Path>) -> Result<Fonts> {
    if let Some(path) = font {
        let font_err = |message: String| ReportError::Font { path: path.to_path_buf(), message };
        let file = File::open(path).map_err(|e| font_err(e.to_string()))?;
        let f = doc
            .add_external_font(BufReader::new(file))
            .map_err(|e| font_err(e.to_string()))?;
        return Ok(Fonts { text: f.clone(), bold: f.clone(), mono: f.clone(), mono_bold: f });
    }

    let builtin = |b: BuiltinFont| doc.add_builtin_font(b).map_err(|e| ReportError::Pdf(format!("font error: {e}")));
    Ok(Fonts {
        text: builtin(BuiltinFont::Helvetica)?,
        bold: builtin(BuiltinFont::HelveticaBold)?,
        mono: builtin(BuiltinFont::Courier)?,
        mono_bold: builtin(BuiltinFont::CourierBold)?,
    })
}

fn draw_table(cur: &mut Cursor, fonts: &Fonts, table: &Table) {
    let ncols = table.max_cols();
    if ncols == 0 {
        return;
    }

    let widths: Vec<usize> = (0..ncols)
        .map(|c| {
            table.rows.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.text.chars().count())
                .max()
                .unwrap_or(0)
                + CELL_PAD
        })
        .collect();

    let size = grid_font_size(widths.iter().sum(), PAGE_W - 2.0 * MARGIN);
    let char_w = size * MONO_EM * PT_MM;

    for row in &table.rows {
        cur.advance(size * PT_MM * LEADING);
        let mut x = MARGIN;
        for (c, cell) in row.iter().enumerate() {
            if cell.highlighted {
                cur.layer.set_fill_color(Color::Rgb(Rgb::new(0.75, 0.0, 0.0, None)));
                cur.text(&cell.text, size, x, &fonts.mono_bold);
                cur.layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
            } else if cell.header {
                cur.text(&cell.text, size, x, &fonts.bold);
            } else if !cell.text.is_empty() {
                cur.text(&cell.text, size, x, &fonts.mono);
            }
            x += widths[c] as f32 * char_w;
        }
    }
}

/// First piece of report text the builtin fonts would drop.
pub fn builtin_unsupported(report: &Report) -> Option<String> {
    let cells = report.tables.iter().flat_map(|t| t.rows.iter().flatten()).map(|c| c.text.clone());
    std::iter::once(report.name())
        .chain(cells)
        .chain(std::iter::once(report.result.to_string()))
        .find(|text| !text.chars().all(is_win_ansi))
}

pub fn is_win_ansi(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | ' '..='~' | '\u{A0}'..='\u{FF}') || WIN_ANSI_EXTRA.contains(&c)
}

/// Largest grid font size (capped at the default) that fits `total_chars` into `avail_mm`.
pub fn grid_font_size(total_chars: usize, avail_mm: f32) -> f32 {
    if total_chars == 0 {
        return GRID_PT;
    }
    let fit = avail_mm / (total_chars as f32 * MONO_EM * PT_MM);
    fit.clamp(MIN_GRID_PT, GRID_PT)
}

/// Greedy word wrap to at most `width` chars per line (longer words stay whole).
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = s!();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { line.chars().count() + 1 };
        if needed > 0 && needed + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::report::ResultText;
    use crate::table::Cell;

    #[test]
    fn wrap_respects_width() {
        assert_eq!(wrap_text("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap_text("  ", 5), Vec::<String>::new());
        assert_eq!(wrap_text("toolongword x", 4), vec!["toolongword", "x"]);
    }

    #[test]
    fn grid_shrinks_to_fit() {
        assert_eq!(grid_font_size(10, 180.0), GRID_PT);
        let size = grid_font_size(120, 180.0);
        assert!(size < GRID_PT && size >= MIN_GRID_PT);
        assert_eq!(grid_font_size(10_000, 180.0), MIN_GRID_PT);
    }

    #[test]
    fn renders_a_pdf() {
        let table = Table::new("t", vec![
            vec![Cell::blank(), Cell::data("C"), Cell::data("-"), Cell::data("3")],
            vec![Cell::data("0"), Cell::data("x3"), Cell::data("4"), Cell::data("1").highlighted()],
        ]);
        let report = Report {
            source: PathBuf::from("data1.html"),
            coefficients: None,
            tables: vec![table; 40],
            result: ResultText::Equation(s!("F(X) = 3*2 + 5*6 = 36")),
        };
        let bytes = render_document(&report, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn cyrillic_without_font_is_refused() {
        let table = Table::new("t", vec![
            vec![Cell::blank(), Cell::th("Базис"), Cell::th("B")],
            vec![Cell::data("0"), Cell::data("x3"), Cell::data("4")],
        ]);
        let report = Report {
            source: PathBuf::from("data1.html"),
            coefficients: None,
            tables: vec![table],
            result: ResultText::Fallback,
        };
        assert_eq!(builtin_unsupported(&report).as_deref(), Some("Базис"));
        let err = render_document(&report, None).unwrap_err();
        assert!(matches!(err, ReportError::NeedsFont { ref text } if text == "Базис"));
        assert!(err.to_string().contains("--font"));
    }

    #[test]
    fn win_ansi_covers_latin_text() {
        assert!("F(X) = 3*4 + 5*6 = 42".chars().all(is_win_ansi));
        assert!("café – “ok” €".chars().all(is_win_ansi));
        assert!(!is_win_ansi('Б'));
        assert!(!is_win_ansi('→'));
    }

    #[test]
    fn missing_font_is_reported() {
        let report = Report {
            source: PathBuf::from("data1.html"),
            coefficients: None,
            tables: Vec::new(),
            result: ResultText::Fallback,
        };
        let err = render_document(&report, Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();
        assert!(matches!(err, ReportError::Font { .. }));
    }
}
