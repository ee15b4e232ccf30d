mod about;
mod cart;
mod checkout;
mod contact;
mod home;
pub mod login;
mod not_found;
mod profile;
mod register;

pub use about::AboutPage;
pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
