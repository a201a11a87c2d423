//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a file under `root`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write fixture file");
}

/// A small polyglot repository touching every scan domain, plus content
/// inside directories that must always be pruned
pub fn sample_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_file(
        root,
        "src/models/user.ts",
        "import { Entity, Column } from 'typeorm';\n\n@Entity()\nexport class User {\n  @Column()\n  email: string;\n}\n",
    );
    write_file(
        root,
        "src/api/client.ts",
        "export const load = () => fetch('https://api.example.com/users');\nexport const save = () => axios.post('https://api.example.com/users', body);\n",
    );
    write_file(
        root,
        "src/forms/signup.ts",
        "import { z } from 'zod';\nexport const schema = z.object({\n  email: z.string().email(),\n  password: z.string().min(8),\n});\n",
    );
    write_file(
        root,
        "app/dashboard/page.tsx",
        "export default function Page() {\n  return <main>dashboard</main>;\n}\n",
    );
    write_file(root, "styles/theme.css", ":root {\n  --brand-primary: #ff0066;\n}\n");
    write_file(
        root,
        "openapi.yaml",
        "openapi: 3.0.0\npaths:\n  /users:\n    get:\n      summary: list\n  /users/{id}:\n    get:\n      summary: one\n",
    );
    write_file(root, "scripts/seed.py", "class Seeder:\n    def run(self):\n        pass\n");

    for pruned in ["node_modules/lib", "dist", ".git/objects", "build/out"] {
        write_file(
            root,
            &format!("{pruned}/hidden.ts"),
            "@Entity()\nexport class Hidden {}\nfetch('/api/hidden');\nexport const x = z.string();\n",
        );
    }

    temp_dir
}

/// Minimal analysis document with one module and the given rules
pub fn analysis_json(module: &str, domain: &str, rules: &[&str]) -> String {
    let rules: Vec<serde_json::Value> = rules
        .iter()
        .enumerate()
        .map(|(i, text)| {
            serde_json::json!({
                "rule": text,
                "files": [{
                    "path": "/repo/src/rules.ts",
                    "codeSnippet": format!("check_{i}()"),
                    "lineNumbers": format!("L{}-L{}", i + 1, i + 1),
                }]
            })
        })
        .collect();
    serde_json::json!({
        "summary": "test",
        "modules": [{
            "name": module,
            "functionalDomain": domain,
            "businessRules": rules,
        }]
    })
    .to_string()
}
