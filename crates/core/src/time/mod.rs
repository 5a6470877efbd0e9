pub mod kst;

pub use kst::{card_date, chart_label, modal_timestamp, parse_timestamp};
