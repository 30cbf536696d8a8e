pub mod contact;
pub mod field;
pub mod gallery;
pub mod home;
pub mod join;
pub mod navigation;

pub use contact::ContactScreen;
pub use gallery::GalleryScreen;
pub use home::HomeScreen;
pub use join::JoinScreen;
pub use navigation::NavigationBar;
