pub mod model;
pub mod repository;

pub use model::BudgetDB;
pub use repository::BudgetRepository;
