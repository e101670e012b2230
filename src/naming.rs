// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage naming convention.
//!
//! Every column name emitted by the generator, whether derived from an entity
//! property or from an audit field line, goes through [`to_storage_name`].
//!
//! | Identifier | Storage name |
//! |------------|--------------|
//! | `CreatedAt` | `created_at` |
//! | `Name` | `name` |
//! | `userId` | `user_id` |
//! | `email` | `email` |

/// Convert an identifier to its storage (column) name.
///
/// A `_` separator is inserted before every upper-case character except the
/// first one, and every character is lower-cased. Input is expected to carry
/// no separators of its own, so no collapsing is done.
///
/// Empty and whitespace-only input is returned unchanged.
///
/// # Example
///
/// ```
/// use entity_config_gen::to_storage_name;
///
/// assert_eq!(to_storage_name("CreatedAt"), "created_at");
/// assert_eq!(to_storage_name("created_at"), "created_at");
/// ```
#[must_use]
pub fn to_storage_name(identifier: &str) -> String {
    if identifier.trim().is_empty() {
        return identifier.to_string();
    }

    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, ch) in identifier.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
