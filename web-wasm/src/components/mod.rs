pub mod analyzing_overlay;
pub mod footer;
pub mod header;
pub mod result_panel;
pub mod shape_guide;
pub mod upload_area;
