pub mod cafe_card;
pub mod cafe_form;
pub mod coffee_card;
pub mod coffee_form;
pub mod coffeebook_title;
pub mod error_banner;
pub mod field;
pub mod github_login;
pub mod layout;
pub mod login_card;
pub mod navbar;
pub mod note_form;
pub mod page;
pub mod rating;
pub mod summary_card;
pub mod theme_toggle;

pub use cafe_card::CafeCard;
pub use cafe_form::CafeFormCard;
pub use coffee_card::CoffeeCard;
pub use coffee_form::CoffeeFormCard;
pub use coffeebook_title::CoffeebookTitleButton;
pub use error_banner::ErrorBanner;
pub use field::Field;
pub use github_login::GitHubLogin;
pub use layout::AppLayout;
pub use login_card::LoginCard;
pub use navbar::Navbar;
pub use note_form::NoteFormCard;
pub use page::Page;
pub use rating::StarRating;
pub use summary_card::CoffeeSummaryCard;
pub use theme_toggle::{Theme, ThemeToggle};
