// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Candidate discovery from Rust sources.
//!
//! Turns parsed Rust files into [`CandidateDeclaration`]s. This is the only
//! part of the crate that knows about `syn`; the generator only sees the
//! records from [`model`](crate::model).
//!
//! # Conventions
//!
//! ```rust,ignore
//! #[generate_configuration]
//! pub struct UserConfiguration;
//!
//! impl UserConfiguration {
//!     pub fn configure(&self, builder: &mut EntityTypeBuilder<User>) {}
//! }
//!
//! pub struct User {
//!     pub id: Uuid,
//!
//!     #[required]
//!     #[max_length(100)]
//!     pub name: String,
//!
//!     pub created_at: DateTime<Utc>,
//! }
//! ```
//!
//! - A candidate is a struct carrying the marker attribute.
//! - Its target is the generic argument of the first `EntityTypeBuilder<..>`
//!   parameter of a `configure` method in any `impl` of the candidate.
//! - The target must be a struct with named fields somewhere in the scanned
//!   sources. Field `created_at` becomes property `CreatedAt`.
//! - Namespaces are the `mod` path of the item under the file's root
//!   namespace, joined with `::`.
//!
//! # Submodules
//!
//! - `attrs`: field attribute → annotation
//! - `types`: Rust type → type classification

mod attrs;
mod types;

use std::collections::HashSet;

use convert_case::{Case, Casing};
use quote::ToTokens;
use syn::{Fields, FnArg, ImplItem, Item, ItemImpl, ItemStruct, Visibility, ext::IdentExt};
use tracing::{debug, instrument};

pub use self::{
    attrs::{parse_annotation, parse_annotations},
    types::classify_type
};
use crate::{
    config::GeneratorConfig,
    model::{CandidateDeclaration, EntityType, PropertyDescriptor}
};

/// Parameter type prefix identifying the entity builder.
const BUILDER_PREFIX: &str = "EntityTypeBuilder";

/// Method whose builder parameter names the target entity.
const CONFIGURE_METHOD: &str = "configure";

/// Parsed Rust sources to discover candidates in.
#[derive(Default)]
pub struct SourceSet {
    files: Vec<(String, syn::File)>
}

impl SourceSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed file whose items live under `namespace`.
    pub fn add(&mut self, namespace: impl Into<String>, file: syn::File) {
        self.files.push((namespace.into(), file));
    }

    /// Parse and add Rust source text.
    ///
    /// # Errors
    ///
    /// Returns the `syn` error if `source` is not valid Rust.
    pub fn add_source(&mut self, namespace: impl Into<String>, source: &str) -> syn::Result<()> {
        let file = syn::parse_file(source)?;
        self.add(namespace, file);
        Ok(())
    }

    /// Number of files in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the set has no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Discover all candidates, in source order.
    #[instrument(skip_all, fields(files = self.files.len()))]
    pub fn candidates(&self, config: &GeneratorConfig) -> Vec<CandidateDeclaration> {
        let mut index = Index::default();
        for (namespace, file) in &self.files {
            index.collect(&file.items, namespace);
        }

        let candidates: Vec<_> = index
            .structs
            .iter()
            .filter_map(|(item, namespace)| {
                let marked = marker_state(item, &config.marker)?;
                Some(index.candidate(item, namespace, marked))
            })
            .collect();

        debug!(count = candidates.len(), "discovered candidates");
        candidates
    }
}

/// Items of all files, flattened.
#[derive(Default)]
struct Index<'a> {
    structs: Vec<(&'a ItemStruct, String)>,
    impls:   Vec<&'a ItemImpl>,
    enums:   HashSet<String>
}

impl<'a> Index<'a> {
    fn collect(&mut self, items: &'a [Item], namespace: &str) {
        for item in items {
            match item {
                Item::Struct(s) => self.structs.push((s, namespace.to_string())),
                Item::Enum(e) => {
                    self.enums.insert(e.ident.unraw().to_string());
                }
                Item::Impl(i) => self.impls.push(i),
                Item::Mod(m) => {
                    if let Some((_, content)) = &m.content {
                        let nested = join_namespace(namespace, &m.ident.unraw().to_string());
                        self.collect(content, &nested);
                    }
                }
                _ => {}
            }
        }
    }

    fn candidate(&self, item: &ItemStruct, namespace: &str, marked: bool) -> CandidateDeclaration {
        let name = item.ident.unraw().to_string();
        let target = self
            .target_name(&name)
            .and_then(|entity| self.entity(&entity));

        if target.is_none() {
            debug!(candidate = %name, "no resolvable target entity");
        }

        CandidateDeclaration {
            name,
            namespace: namespace.to_string(),
            target,
            marked
        }
    }

    /// Entity name from the candidate's `configure(builder: EntityTypeBuilder<E>)`.
    ///
    /// Only the first `configure` method and its first builder parameter
    /// count.
    fn target_name(&self, candidate: &str) -> Option<String> {
        let configure = self
            .impls
            .iter()
            .filter(|i| types::last_ident(&i.self_ty).as_deref() == Some(candidate))
            .flat_map(|i| &i.items)
            .find_map(|item| match item {
                ImplItem::Fn(f) if f.sig.ident == CONFIGURE_METHOD => Some(f),
                _ => None
            })?;

        let builder = configure.sig.inputs.iter().find_map(|arg| match arg {
            FnArg::Typed(pat) if is_builder(&pat.ty) => Some(&pat.ty),
            _ => None
        })?;
        types::first_type_arg(builder).and_then(types::last_ident)
    }

    fn entity(&self, name: &str) -> Option<EntityType> {
        let (item, namespace) = self
            .structs
            .iter()
            .find(|(s, _)| s.ident.unraw() == name)?;

        let Fields::Named(fields) = &item.fields else {
            debug!(entity = %name, "target entity has no named fields");
            return None;
        };

        let properties = fields
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.as_ref()?.unraw().to_string();
                let ty = types::classify_type(&field.ty, &self.enums);
                debug!(
                    field = %ident,
                    ty = %field.ty.to_token_stream(),
                    class = ?ty,
                    "classified field"
                );
                Some(PropertyDescriptor {
                    name: ident.to_case(Case::Pascal),
                    ty,
                    is_public: matches!(field.vis, Visibility::Public(_)),
                    is_static: false,
                    annotations: attrs::parse_annotations(&field.attrs)
                })
            })
            .collect();

        Some(EntityType {
            name: name.to_string(),
            namespace: namespace.clone(),
            properties
        })
    }
}

/// `None` if the struct is not a candidate, otherwise whether the marker
/// matches exactly.
fn marker_state(item: &ItemStruct, marker: &str) -> Option<bool> {
    item.attrs
        .iter()
        .filter_map(|attr| attr.path().segments.last())
        .map(|segment| segment.ident.to_string())
        .filter(|name| name.contains(marker))
        .fold(None, |state, name| Some(state.unwrap_or(false) || name == marker))
}

fn is_builder(ty: &syn::Type) -> bool {
    types::last_ident(ty).is_some_and(|name| name.starts_with(BUILDER_PREFIX))
}

fn join_namespace(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}::{child}")
    }
}
