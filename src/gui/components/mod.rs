pub mod export_bar;
pub mod file_panel;
pub mod report_view;
pub mod tabs;
