pub mod table;

pub use table::{BodyState, DataTable, TableColumn, TableResponse, TableState, visible_columns};
