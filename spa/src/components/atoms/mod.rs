pub mod input_text;
pub mod page_header;
