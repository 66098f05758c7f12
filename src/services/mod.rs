pub mod llm_service;
pub mod question_parser;
pub mod report_writer;

pub use llm_service::LlmService;
pub use report_writer::ReportWriter;
