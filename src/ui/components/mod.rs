pub mod record_list;

pub use record_list::render_record_list;
