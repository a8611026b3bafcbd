pub mod dialogs;
pub mod employer_view;
pub mod freelancer_view;
pub mod header;
pub mod qr_scan;
pub mod review_form;
pub mod reviews_list;
pub mod skill_picker;
pub mod star_rating;
pub mod toast;
