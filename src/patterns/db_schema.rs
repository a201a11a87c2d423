//! Database and ORM schema definitions (Prisma, TypeORM, Sequelize,
//! SQLAlchemy, Django, raw SQL DDL).

use std::sync::LazyLock;

use super::{PatternSet, PatternSpec};

pub const INCLUDE: &[&str] = &["**/*.prisma", "**/*.sql", "**/*.ts", "**/*.js", "**/*.py"];

pub const EXCLUDE: &[&str] = &[
    "**/.git/**",
    "**/node_modules/**",
    "**/.venv/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/coverage/**",
    "**/*.spec.*",
    "**/*.test.*",
];

/// Characters of context kept on each side of a match
pub const CONTEXT_CHARS: usize = 160;

pub const PATTERNS: &[PatternSpec] = &[
    PatternSpec::per_content("prisma_model", r"(?i)\bmodel\s+\w+\s*\{"),
    PatternSpec::per_content("typeorm_entity", r"(?s)@Entity\(.*?\)\s*export\s+class\s+\w+"),
    PatternSpec::per_content(
        "typeorm_relation",
        r"(?i)@(OneToOne|OneToMany|ManyToOne|ManyToMany)\(",
    ),
    PatternSpec::per_content(
        "sequelize_define",
        r#"(?i)sequelize\.define\s*\(\s*['"]\w+['"]"#,
    ),
    PatternSpec::per_content(
        "sqlalchemy_model",
        r#"(?i)class\s+\w+\(Base\):\s*\n\s*__tablename__\s*=\s*['"]\w+['"]"#,
    ),
    PatternSpec::per_content("sql_create_table", r"(?i)CREATE\s+TABLE\s+\w+\s*\("),
    PatternSpec::per_content("sql_foreign_key", r"(?i)FOREIGN\s+KEY|REFERENCES\s+\w+"),
    PatternSpec::per_content("django_model", r"class\s+\w+\(models\.Model\):"),
];

pub static SET: LazyLock<PatternSet> = LazyLock::new(|| PatternSet::compile(PATTERNS));
