pub mod chart_interface;
