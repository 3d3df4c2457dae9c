pub mod books;
pub mod feedback;
pub mod loans;
