//! Testing utilities for storefront
//!
//! This module provides fixtures shared by the unit tests: a small product
//! catalog, plus a scripted `ProfileSource` and `AvatarUploader` that record
//! how they were called.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Product};
use crate::profile::{
    AvatarFile, AvatarUploader, ProfileError, ProfileSource, UploadReceipt, UserRecord,
};
use std::cell::{Cell, RefCell};

fn product(
    id: &str,
    name: &str,
    category: &str,
    vendor: &str,
    price: f64,
    rating: f32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        vendor: vendor.to_string(),
        price,
        rating,
        in_stock: true,
        on_sale: false,
        free_shipping: false,
    }
}

/// Six products across four categories and five vendors
///
/// | id         | category    | vendor     | price  | rating | flags                  |
/// |------------|-------------|------------|--------|--------|------------------------|
/// | headphones | electronics | techstore  | 59.99  | 4.5    | in stock, free ship    |
/// | laptop     | electronics | techstore  | 899.00 | 4.8    | in stock, free ship    |
/// | charger    | electronics | gadgetbarn | 9.99   | 3.2    | on sale                |
/// | novel      | books       | bookworm   | 12.00  | 4.2    | in stock               |
/// | puzzle     | toys        | toyland    | 24.50  | 3.9    | in stock, on sale      |
/// | jacket     | clothing    | fashionhub | 120.00 | 3.5    | in stock, free ship    |
#[must_use]
pub fn sample_catalog() -> Catalog {
    let headphones = Product {
        free_shipping: true,
        ..product("headphones", "Wireless Headphones", "electronics", "techstore", 59.99, 4.5)
    };
    let laptop = Product {
        free_shipping: true,
        ..product("laptop", "Ultrabook Laptop", "electronics", "techstore", 899.0, 4.8)
    };
    let charger = Product {
        in_stock: false,
        on_sale: true,
        ..product("charger", "USB-C Charger", "electronics", "gadgetbarn", 9.99, 3.2)
    };
    let novel = product("novel", "Mystery Novel", "books", "bookworm", 12.0, 4.2);
    let puzzle = Product {
        on_sale: true,
        ..product("puzzle", "Jigsaw Puzzle", "toys", "toyland", 24.5, 3.9)
    };
    let jacket = Product {
        free_shipping: true,
        ..product("jacket", "Rain Jacket", "clothing", "fashionhub", 120.0, 3.5)
    };

    Catalog::new(vec![headphones, laptop, charger, novel, puzzle, jacket])
}

/// `ProfileSource` that returns a fixed answer and records each call
#[derive(Debug)]
pub struct ScriptedSource {
    result: Result<UserRecord, String>,
    calls: Cell<usize>,
    last_token: RefCell<Option<String>>,
}

impl ScriptedSource {
    /// Source that always returns a profile with the given name
    #[must_use]
    pub fn ok(name: &str) -> Self {
        let record = UserRecord {
            id: 1,
            name: Some(name.to_string()),
            email: "user@example.com".to_string(),
            ..Default::default()
        };
        Self {
            result: Ok(record),
            calls: Cell::new(0),
            last_token: RefCell::new(None),
        }
    }

    /// Source that always fails with a fetch error
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: Cell::new(0),
            last_token: RefCell::new(None),
        }
    }

    /// Number of fetches so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Token passed to the most recent fetch
    #[must_use]
    pub fn last_token(&self) -> Option<String> {
        self.last_token.borrow().clone()
    }
}

impl ProfileSource for ScriptedSource {
    fn fetch_profile(&self, token: &str) -> Result<UserRecord, ProfileError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = Some(token.to_string());
        self.result.clone().map_err(ProfileError::Fetch)
    }
}

/// `AvatarUploader` that returns a fixed answer and records each call
#[derive(Debug)]
pub struct ScriptedUploader {
    result: Result<UploadReceipt, String>,
    calls: Cell<usize>,
    last_token: RefCell<Option<String>>,
}

impl ScriptedUploader {
    fn with_result(result: Result<UploadReceipt, String>) -> Self {
        Self {
            result,
            calls: Cell::new(0),
            last_token: RefCell::new(None),
        }
    }

    /// Uploader that stores every file at `url`
    #[must_use]
    pub fn returning(url: &str) -> Self {
        Self::with_result(Ok(UploadReceipt {
            profile_pic_url: Some(url.to_string()),
        }))
    }

    /// Uploader whose response has no picture URL
    #[must_use]
    pub fn without_url() -> Self {
        Self::with_result(Ok(UploadReceipt::default()))
    }

    /// Uploader that always fails
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self::with_result(Err(message.to_string()))
    }

    /// Number of uploads so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Token passed to the most recent upload
    #[must_use]
    pub fn last_token(&self) -> Option<String> {
        self.last_token.borrow().clone()
    }
}

impl AvatarUploader for ScriptedUploader {
    fn upload_avatar(&self, token: &str, _file: &AvatarFile) -> Result<UploadReceipt, ProfileError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = Some(token.to_string());
        self.result.clone().map_err(ProfileError::Upload)
    }
}
