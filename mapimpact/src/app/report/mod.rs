pub mod report_ops;
