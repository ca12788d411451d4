pub mod administrator;
