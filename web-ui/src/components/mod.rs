// Components module

pub mod general_form;
pub mod layout;
pub mod preview;
pub mod rule_list;
pub mod save_button;
pub mod text_field;
pub mod tier_card;

pub use general_form::GeneralForm;
pub use layout::AppLayout;
pub use preview::Preview;
pub use rule_list::RuleList;
pub use save_button::SaveButton;
pub use text_field::TextField;
pub use tier_card::TierCard;
