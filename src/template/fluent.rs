// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fluent configuration class template.
//!
//! Renders each column as one chained `builder.Property(...)` statement:
//!
//! | Directive | Call |
//! |-----------|------|
//! | `ColumnType(t)` | `.HasColumnType("t")` |
//! | `Required` | `.IsRequired()` |
//! | `MaxLength(n)` | `.HasMaxLength(n)` |
//! | `ConcurrencyToken` | `.IsConcurrencyToken()` |
//! | `RowVersion` | `.IsRowVersion()` |
//! | `ColumnName(c)` | `.HasColumnName("c")` |
//!
//! Base columns are addressed by name (`builder.Property("CreatedAt")`) since
//! the base is generic over the entity; entity columns use a member lambda
//! (`builder.Property(e => e.Name)`). Namespaces written with `::` are
//! rendered with `.`.

use super::{BaseUnit, ColumnUnit, EntityUnit, Template};
use crate::rules::Directive;

const HEADER: &str = "// <auto-generated />\n\
                      using Microsoft.EntityFrameworkCore;\n\
                      using Microsoft.EntityFrameworkCore.Metadata.Builders;\n";

const INDENT: &str = "            ";

/// Fluent `IEntityTypeConfiguration` class template.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentTemplate;

impl Template for FluentTemplate {
    fn file_suffix(&self) -> &str {
        ".g.cs"
    }

    fn render_base(&self, unit: &BaseUnit<'_>) -> String {
        let mut out = String::from(HEADER);

        // Class
        out.push_str(&format!("\nnamespace {}\n{{\n", namespace(unit.namespace)));
        out.push_str(&format!(
            "    public abstract class {}<T> : IEntityTypeConfiguration<T> where T : class\n",
            unit.name
        ));
        out.push_str("    {\n");
        out.push_str("        public virtual void Configure(EntityTypeBuilder<T> builder)\n");
        out.push_str("        {\n");

        // Columns
        for column in unit.columns {
            let target = format!("\"{}\"", escape(&column.member));
            out.push_str(&statement(&target, column));
        }

        out.push_str("        }\n    }\n}\n");
        out
    }

    fn render_entity(&self, unit: &EntityUnit<'_>) -> String {
        let mut out = String::from(HEADER);
        if !unit.entity_namespace.is_empty() && unit.entity_namespace != unit.namespace {
            out.push_str(&format!("using {};\n", namespace(unit.entity_namespace)));
        }

        // Class
        out.push_str(&format!("\nnamespace {}\n{{\n", namespace(unit.namespace)));
        out.push_str(&format!(
            "    public partial class {} : {}<{}>\n",
            unit.name, unit.base_name, unit.entity
        ));
        out.push_str("    {\n");
        out.push_str(&format!(
            "        public override void Configure(EntityTypeBuilder<{}> builder)\n",
            unit.entity
        ));
        out.push_str("        {\n");

        // Columns
        for column in unit.columns {
            let target = format!("e => e.{}", column.member);
            out.push_str(&statement(&target, column));
        }

        // Audit base
        out.push_str(&format!("{INDENT}base.Configure(builder);\n"));
        out.push_str("        }\n    }\n}\n");
        out
    }
}

/// Render one `builder.Property(target)...;` line.
fn statement(target: &str, column: &ColumnUnit) -> String {
    let mut line = format!("{INDENT}builder.Property({target})");
    for directive in &column.directives {
        let call = match directive {
            Directive::ColumnType(ty) => format!(".HasColumnType(\"{}\")", escape(ty)),
            Directive::Required => ".IsRequired()".to_string(),
            Directive::MaxLength(len) => format!(".HasMaxLength({len})"),
            Directive::ConcurrencyToken => ".IsConcurrencyToken()".to_string(),
            Directive::RowVersion => ".IsRowVersion()".to_string(),
            Directive::ColumnName(name) => format!(".HasColumnName(\"{}\")", escape(name))
        };
        line.push_str(&call);
    }
    line.push_str(";\n");
    line
}

fn namespace(ns: &str) -> String {
    ns.replace("::", ".")
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(member: &str, directives: Vec<Directive>) -> ColumnUnit {
        ColumnUnit {
            member: member.to_string(),
            directives
        }
    }

    #[test]
    fn base_golden() {
        let columns = [
            column(
                "CreatedAt",
                vec![
                    Directive::ColumnType("timestamp".into()),
                    Directive::ColumnName("created_at".into())
                ]
            ),
            column(
                "CreatedBy",
                vec![
                    Directive::MaxLength(255),
                    Directive::ColumnName("created_by".into())
                ]
            )
        ];
        let text = FluentTemplate.render_base(&BaseUnit {
            name:      "AuditEntityConfiguration",
            namespace: "app::config",
            columns:   &columns
        });

        let expected = "// <auto-generated />
using Microsoft.EntityFrameworkCore;
using Microsoft.EntityFrameworkCore.Metadata.Builders;

namespace app.config
{
    public abstract class AuditEntityConfiguration<T> : IEntityTypeConfiguration<T> where T : class
    {
        public virtual void Configure(EntityTypeBuilder<T> builder)
        {
            builder.Property(\"CreatedAt\").HasColumnType(\"timestamp\").HasColumnName(\"created_at\");
            builder.Property(\"CreatedBy\").HasMaxLength(255).HasColumnName(\"created_by\");
        }
    }
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_base_has_empty_body() {
        let text = FluentTemplate.render_base(&BaseUnit {
            name:      "AuditEntityConfiguration",
            namespace: "app",
            columns:   &[]
        });
        assert!(text.contains("        {\n        }\n"));
        assert!(!text.contains("builder.Property"));
    }

    #[test]
    fn entity_golden() {
        let columns = [
            column(
                "Name",
                vec![
                    Directive::Required,
                    Directive::MaxLength(100),
                    Directive::ColumnName("name".into())
                ]
            ),
            column("Age", vec![Directive::ColumnName("age".into())])
        ];
        let text = FluentTemplate.render_entity(&EntityUnit {
            name:             "UserCommonConfiguration",
            base_name:        "AuditEntityConfiguration",
            namespace:        "app::config",
            entity:           "User",
            entity_namespace: "app::domain",
            columns:          &columns
        });

        let expected = "// <auto-generated />
using Microsoft.EntityFrameworkCore;
using Microsoft.EntityFrameworkCore.Metadata.Builders;
using app.domain;

namespace app.config
{
    public partial class UserCommonConfiguration : AuditEntityConfiguration<User>
    {
        public override void Configure(EntityTypeBuilder<User> builder)
        {
            builder.Property(e => e.Name).IsRequired().HasMaxLength(100).HasColumnName(\"name\");
            builder.Property(e => e.Age).HasColumnName(\"age\");
            base.Configure(builder);
        }
    }
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn same_namespace_is_not_imported() {
        let text = FluentTemplate.render_entity(&EntityUnit {
            name:             "UserCommonConfiguration",
            base_name:        "AuditEntityConfiguration",
            namespace:        "app",
            entity:           "User",
            entity_namespace: "app",
            columns:          &[]
        });
        assert!(!text.contains("using app;"));
        assert!(text.contains("base.Configure(builder);"));
    }

    #[test]
    fn all_directives_render() {
        let line = statement(
            "e => e.Version",
            &column(
                "Version",
                vec![
                    Directive::ColumnType("bytea".into()),
                    Directive::Required,
                    Directive::MaxLength(8),
                    Directive::ConcurrencyToken,
                    Directive::RowVersion,
                    Directive::ColumnName("version".into())
                ]
            )
        );
        assert_eq!(
            line,
            "            builder.Property(e => e.Version).HasColumnType(\"bytea\").IsRequired()\
             .HasMaxLength(8).IsConcurrencyToken().IsRowVersion().HasColumnName(\"version\");\n"
        );
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(escape(r#"varchar("x")"#), r#"varchar(\"x\")"#);
        assert_eq!(escape(r"a\b"), r"a\\b");
    }
}
