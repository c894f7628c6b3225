pub mod category_row;
pub mod file_drop_zone;
pub mod file_list;
pub mod icon;
pub mod insight_card;
pub mod page_header;
pub mod progress_bar;
pub mod service_card;
pub mod stat_card;
