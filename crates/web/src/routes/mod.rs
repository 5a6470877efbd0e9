pub mod fragments;
pub mod pages;
pub mod proxy;
pub mod seo;
