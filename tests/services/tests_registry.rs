//! Parser registration and dispatch.

use std::path::Path;
use std::sync::Arc;
use std::thread;

use idocit::base::Delimiters;
use idocit::services::{
    InterfaceParser, ParserRegistry, ParsingError, load_interface, write_interface,
};
use idocit::structure::{NewElement, SignatureTree};

/// Parser producing an artifact named after the file.
struct NamedArtifactParser {
    file_type: &'static str,
}

impl InterfaceParser for NamedArtifactParser {
    fn parse(&self, path: &Path) -> Result<SignatureTree, ParsingError> {
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Err(ParsingError::parser("empty interface file"));
        }
        let mut tree = SignatureTree::new();
        tree.create(None, NewElement::artifact("File").with_identifier(contents.trim()))
            .map_err(|e| ParsingError::parser(e.to_string()))?;
        Ok(tree)
    }

    fn write(&self, tree: &SignatureTree, path: &Path) -> Result<(), ParsingError> {
        let name = tree
            .roots()
            .first()
            .and_then(|root| tree.get(*root))
            .and_then(|root| root.identifier.clone())
            .unwrap_or_default();
        std::fs::write(path, name)?;
        Ok(())
    }

    fn supported_type(&self) -> &str {
        self.file_type
    }

    fn delimiters(&self) -> Delimiters {
        Delimiters::new("::", ".", "#")
    }
}

#[test]
fn test_unknown_types_are_not_supported() {
    let registry = ParserRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.is_supported("java"));
    assert!(registry.parser("java").is_none());
    assert!(registry.delimiters("java").is_none());
    assert!(load_interface(&registry, Path::new("Customer.java")).unwrap().is_none());
}

#[test]
fn test_concurrent_registration() {
    let registry = Arc::new(ParserRegistry::new());
    let handles: Vec<_> = ["wsdl", "java", "cs"]
        .into_iter()
        .map(|file_type| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.register(Arc::new(NamedArtifactParser { file_type }));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 3);
    let types: Vec<String> = registry.supported_types().iter().map(ToString::to_string).collect();
    assert_eq!(types, vec!["cs", "java", "wsdl"]);
    assert_eq!(registry.delimiters("JAVA"), Some(Delimiters::new("::", ".", "#")));
}

#[test]
fn test_load_and_write_through_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("service.wsdl");
    std::fs::write(&path, "CustomerService\n").unwrap();

    let registry = ParserRegistry::new().with_parser(Arc::new(NamedArtifactParser { file_type: "wsdl" }));
    let tree = load_interface(&registry, &path).unwrap().unwrap();
    let root = tree.get(tree.roots()[0]).unwrap();
    assert_eq!(root.identifier.as_deref(), Some("CustomerService"));

    let out = dir.path().join("copy.wsdl");
    write_interface(&registry, &tree, &out).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "CustomerService");

    assert!(matches!(
        write_interface(&registry, &tree, &dir.path().join("copy.idl")),
        Err(ParsingError::Unsupported(_))
    ));
}

#[test]
fn test_parser_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.wsdl");
    std::fs::write(&empty, "  ").unwrap();

    let registry = ParserRegistry::new().with_parser(Arc::new(NamedArtifactParser { file_type: "wsdl" }));
    assert!(matches!(load_interface(&registry, &empty), Err(ParsingError::Parser(_))));
    assert!(matches!(
        load_interface(&registry, &dir.path().join("missing.wsdl")),
        Err(ParsingError::Io(_))
    ));
}
