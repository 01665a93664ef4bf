//! Domain identifiers (strongly-typed IDs).
//!
//! # ジェネリック実装
//! `Id<T>` というジェネリック型で共通実装を提供しつつ、
//! `T` は実行時には使わない（PhantomData）マーカー型として、
//! コンパイル時の型安全性を提供します。
//!
//! ## なぜ i64 なのか？
//! プロフィールとユーザーの ID はサーバー側で採番され、ワイヤ上は
//! 素の整数です。エンジンは ID を生成しない（読むだけ）ので、
//! サーバーの表現をそのまま持ちます。
//!
//! ## Phantom Type パターン
//! - コードの重複を排除（DRY原則）
//! - 型安全性を維持（ProfileId と UserId は混同できない）
//! - `#[serde(transparent)]` でワイヤ上は整数のまま

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"profile-", "user-", "swipe-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    /// Display で使うプレフィックス（例: "profile-"）
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
///
/// `T` は PhantomData で、実行時にはメモリを消費しませんが、
/// コンパイル時に型安全性を提供します。
///
/// # 例
/// ```ignore
/// let profile_id = ProfileId::new(3);
/// let user_id = UserId::new(1);
/// // profile_id と user_id は異なる型なので、混同できない
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// サーバー採番の整数から Id を作成
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// 内部の整数を取得
    pub fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T: IdMarker> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Profile のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Profile {}

impl IdMarker for Profile {
    fn prefix() -> &'static str {
        "profile-"
    }
}

/// User のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum User {}

impl IdMarker for User {
    fn prefix() -> &'static str {
        "user-"
    }
}

/// Swipe のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Swipe {}

impl IdMarker for Swipe {
    fn prefix() -> &'static str {
        "swipe-"
    }
}

// ========================================
// Type Alias（使いやすさのため）
// ========================================

/// Identifier of a candidate profile (the swipe target).
pub type ProfileId = Id<Profile>;

/// Identifier of a user account (the swiping actor).
pub type UserId = Id<User>;

/// Identifier of a stored swipe row (assigned by the store).
pub type SwipeId = Id<Swipe>;
