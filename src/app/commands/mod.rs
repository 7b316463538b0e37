pub mod create_class;
pub mod registrar;
