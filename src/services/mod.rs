pub mod ai;
pub mod availability;
pub mod banners;
pub mod booking;
pub mod calendar;
pub mod clock;
pub mod favorites;
pub mod gift_cards;
pub mod i18n;
pub mod notifications;
pub mod payments;
pub mod pricing;
pub mod referrals;
pub mod social_proof;
pub mod storage;
pub mod try_on;
pub mod whatsapp;
