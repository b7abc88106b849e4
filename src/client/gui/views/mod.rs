pub mod notice_bar;
pub mod recommend;
