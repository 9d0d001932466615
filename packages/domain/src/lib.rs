//! # TechCorp ドメイン層
//!
//! 演習環境の「仕掛け」そのものを表すモデルを定義する。
//!
//! ## モジュール構成
//!
//! - [`flag`] - 各サービスに埋め込まれた 7 つのフラグ
//! - [`credential`] - Admin Portal の固定認証情報セット
//! - [`access_gate`] - Basic 認証の許可 / 拒否を決めるアクセスゲート
//! - [`user`] / [`service_offering`] - Main Site の DB に投入するシードデータの型
//! - [`error`] - ドメイン層のエラー
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層は HTTP にも DB にも依存しない。
//!
//! ```rust
//! use techcorp_domain::{
//!     access_gate::{ADMIN_PORTAL_REALM, AccessDecision, AccessGate},
//!     credential::{CredentialSet, Credentials},
//! };
//!
//! let gate = AccessGate::new(CredentialSet::seeded(), ADMIN_PORTAL_REALM);
//! let decision = gate.decide(Some(&Credentials::new("admin", "admin123")));
//! assert!(decision.is_allowed());
//! ```

pub mod access_gate;
pub mod credential;
pub mod error;
pub mod flag;
pub mod service_offering;
pub mod user;

pub use error::DomainError;
