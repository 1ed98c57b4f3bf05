pub mod home;

pub use home::home_page;
pub use test::test_page;
