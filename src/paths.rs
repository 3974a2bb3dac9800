// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relative import paths between generated files.

/// Computes the import path from one output directory to another.
pub trait PathResolver {
    /// Relative path from directory `from` to directory `to`.
    ///
    /// Returns `"."` when both name the same directory. Any other result
    /// starts with `..` or `./`, so it never reads as a package specifier.
    fn relative(&self, from: &str, to: &str) -> String;

    /// Import source for `file` living in directory `to`, seen from `from`.
    fn import_source(&self, from: &str, to: &str, file: &str) -> String {
        format!("{}/{file}", self.relative(from, to))
    }
}

/// Lexical resolver over `/`-separated paths.
///
/// Backslashes are treated as separators, `.` segments are dropped and the
/// result always uses `/`. The file system is never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativePaths;

impl PathResolver for RelativePaths {
    fn relative(&self, from: &str, to: &str) -> String {
        let from = segments(from);
        let to = segments(to);

        let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

        let parts: Vec<&str> = std::iter::repeat_n("..", from.len() - common)
            .chain(to[common..].iter().copied())
            .collect();

        match parts.first() {
            None => ".".to_string(),
            Some(&"..") => parts.join("/"),
            Some(_) => format!("./{}", parts.join("/"))
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_directory() {
        assert_eq!(RelativePaths.relative("src/generated", "src/generated"), ".");
        assert_eq!(RelativePaths.relative("", ""), ".");
    }

    #[test]
    fn sibling_directories() {
        assert_eq!(
            RelativePaths.relative("src/user/dto", "src/post/dto"),
            "../../post/dto"
        );
    }

    #[test]
    fn child_and_parent() {
        assert_eq!(RelativePaths.relative("out", "out/user/entities"), "./user/entities");
        assert_eq!(RelativePaths.relative("out/user/dto", "out"), "../..");
    }

    #[test]
    fn windows_separators_are_normalized() {
        assert_eq!(RelativePaths.relative("out\\user\\dto", "out\\user\\entities"), "../entities");
    }

    #[test]
    fn import_source_joins_file() {
        assert_eq!(
            RelativePaths.import_source("out/post/dto", "out/user/dto", "create-user.dto"),
            "../../user/dto/create-user.dto"
        );
        assert_eq!(
            RelativePaths.import_source("out", "out", "user.entity"),
            "./user.entity"
        );
    }

    #[test]
    fn child_import_source_is_explicitly_relative() {
        assert_eq!(
            RelativePaths.import_source("out", "out/user/entities", "user.entity"),
            "./user/entities/user.entity"
        );
        assert_eq!(
            RelativePaths.import_source("", "enums", "role.enum"),
            "./enums/role.enum"
        );
    }
}
