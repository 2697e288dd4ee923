//! リアルタイムチャットのインフラストラクチャ
//!
//! ルームレジストリ・メッセージログ・ファンアウトを担う `ChatHub` を
//! 提供します。

pub mod hub;

pub use hub::{ChatHub, SubscriberChannel};
