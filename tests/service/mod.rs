mod catalog;
mod note;
mod session;
