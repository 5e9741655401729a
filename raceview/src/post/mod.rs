pub mod view_report;
