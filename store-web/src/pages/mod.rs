//! Page modules

pub mod checkout;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod subscribe;

pub use checkout::CheckoutPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use subscribe::SubscribePage;
