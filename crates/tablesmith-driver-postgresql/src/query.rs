//! Catalog queries. Every query takes the schema name as `$1`.
//!
//! information_schema exposes its columns through domain types
//! (`sql_identifier`, `yes_or_no`, `cardinal_number`); they are cast to
//! plain `text`/`int4` so row decoding does not depend on the domains.

pub(crate) const LIST_TABLES: &str = "
    SELECT t.table_name::text AS table_name
    FROM information_schema.tables t
    WHERE t.table_schema = $1
      AND t.table_type = 'BASE TABLE'
    ORDER BY t.table_name
";

/// One row per (column, constraint) pair; columns without constraints get a
/// single row with a NULL `constraint_type`. `$2` is the table name.
///
/// Enums, domains, extension types and arrays report `USER-DEFINED` or
/// `ARRAY` as `data_type`; their `udt_name` is used instead.
pub(crate) const READ_COLUMNS: &str = "
    SELECT
        c.ordinal_position::int4 AS ordinal_position,
        c.column_name::text AS column_name,
        CASE
            WHEN c.data_type IN ('USER-DEFINED', 'ARRAY') THEN c.udt_name::text
            ELSE c.data_type::text
        END AS data_type,
        c.is_nullable::text AS is_nullable,
        c.character_maximum_length::int4 AS character_maximum_length,
        tc.constraint_type::text AS constraint_type,
        ccu.table_name::text AS referenced_table,
        ccu.column_name::text AS referenced_column,
        EXISTS (
            SELECT 1
            FROM pg_catalog.pg_index i
            JOIN pg_catalog.pg_attribute a
                ON a.attnum = ANY(i.indkey)
                AND a.attrelid = i.indrelid
            WHERE i.indrelid = (quote_ident(c.table_schema) || '.' || quote_ident(c.table_name))::regclass
              AND i.indisunique
              AND a.attname = c.column_name
        ) AS is_unique
    FROM information_schema.columns c
    LEFT JOIN information_schema.key_column_usage kcu
        ON c.table_schema = kcu.table_schema
        AND c.table_name = kcu.table_name
        AND c.column_name = kcu.column_name
    LEFT JOIN information_schema.table_constraints tc
        ON kcu.constraint_schema = tc.constraint_schema
        AND kcu.constraint_name = tc.constraint_name
        AND kcu.table_name = tc.table_name
    LEFT JOIN information_schema.constraint_column_usage ccu
        ON tc.constraint_schema = ccu.constraint_schema
        AND tc.constraint_name = ccu.constraint_name
        AND tc.constraint_type = 'FOREIGN KEY'
    WHERE c.table_schema = $1
      AND c.table_name = $2
    ORDER BY c.ordinal_position
";

/// Foreign keys in `$1` whose target table is `$2`. Uniqueness is evaluated
/// on the referencing column of the child table.
pub(crate) const FIND_CHILDREN: &str = "
    SELECT
        tc.table_name::text AS child_table,
        kcu.column_name::text AS child_column,
        EXISTS (
            SELECT 1
            FROM pg_catalog.pg_index i
            JOIN pg_catalog.pg_attribute a
                ON a.attnum = ANY(i.indkey)
                AND a.attrelid = i.indrelid
            WHERE i.indrelid = (quote_ident(tc.table_schema) || '.' || quote_ident(tc.table_name))::regclass
              AND i.indisunique
              AND a.attname = kcu.column_name
        ) AS is_unique
    FROM information_schema.table_constraints tc
    JOIN information_schema.constraint_column_usage ccu
        ON tc.constraint_schema = ccu.constraint_schema
        AND tc.constraint_name = ccu.constraint_name
    JOIN information_schema.key_column_usage kcu
        ON tc.constraint_schema = kcu.constraint_schema
        AND tc.constraint_name = kcu.constraint_name
        AND tc.table_name = kcu.table_name
    WHERE tc.constraint_type = 'FOREIGN KEY'
      AND tc.table_schema = $1
      AND ccu.table_schema = $1
      AND ccu.table_name = $2
    ORDER BY tc.table_name, kcu.column_name
";
