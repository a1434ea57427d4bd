use crate::classify::TYPE_TABLE;
use crate::{Category, TargetType, TypeDescriptor, classify, known_names, lookup};

fn value(name: &str) -> TargetType {
    classify(&TypeDescriptor::value(name))
}

fn pointer(name: &str, depth: usize) -> TargetType {
    classify(&TypeDescriptor::new(name, depth, ""))
}

#[test]
fn table_is_sorted_and_unique() {
    for pair in TYPE_TABLE.windows(2) {
        assert!(
            pair[0].0 < pair[1].0,
            "{} must sort before {}",
            pair[0].0,
            pair[1].0
        );
    }
}

#[test]
fn every_table_entry_is_found() {
    for name in known_names() {
        assert!(lookup(name).is_some(), "{name} not found by lookup");
    }
}

#[test]
fn documented_categories() {
    let expected = [
        ("GLbyte", Category::Int8),
        ("GLubyte", Category::Uint8),
        ("GLshort", Category::Int16),
        ("GLushort", Category::Uint16),
        ("GLint", Category::Int32),
        ("GLuint", Category::Uint32),
        ("GLint64", Category::Int64),
        ("GLint64EXT", Category::Int64),
        ("GLuint64", Category::Uint64),
        ("GLuint64EXT", Category::Uint64),
        ("GLfloat", Category::Float32),
        ("GLclampf", Category::Float32),
        ("GLdouble", Category::Float64),
        ("GLclampd", Category::Float64),
        ("GLclampx", Category::Int32),
        ("GLsizei", Category::Int32),
        ("GLfixed", Category::Int32),
        ("GLchar", Category::Int8),
        ("GLcharARB", Category::Int8),
        ("GLboolean", Category::Bool),
        ("GLenum", Category::Uint32),
        ("GLbitfield", Category::Uint32),
        ("GLhalf", Category::Uint16),
        ("GLhalfNV", Category::Uint16),
        ("GLintptr", Category::Int),
        ("GLintptrARB", Category::Int),
        ("GLsizeiptr", Category::Int),
        ("GLsizeiptrARB", Category::Int),
        ("GLhandleARB", Category::Uintptr),
        ("GLeglImageOES", Category::Uintptr),
        ("GLvdpauSurfaceNV", Category::Uintptr),
        ("GLsync", Category::Pointer),
    ];

    assert_eq!(expected.len(), TYPE_TABLE.len());
    for (name, category) in expected {
        assert_eq!(
            value(name),
            TargetType::Mapped {
                category,
                indirection: 0
            },
            "{name}"
        );
    }
}

#[test]
fn bare_void_is_void() {
    assert_eq!(value("void"), TargetType::Void);
    assert_eq!(value("GLvoid"), TargetType::Void);
    assert_eq!(value("void").category(), Category::Void);
    assert!(value("GLvoid").is_void());
}

#[test]
fn void_pointers_are_addresses() {
    let single = pointer("void", 1);
    assert_eq!(single, TargetType::Buffer { depth: 1 });
    assert_eq!(single.category(), Category::Uintptr);
    assert_eq!(single.indirection(), 0);

    let double = pointer("GLvoid", 2);
    assert_eq!(double, TargetType::Buffer { depth: 2 });
    assert_eq!(double.category(), Category::Uintptr);
    assert_eq!(double.indirection(), 1);
}

#[test]
fn deep_void_pointer_falls_back_to_native() {
    assert_eq!(pointer("void", 3), TargetType::Unmapped { indirection: 3 });
}

#[test]
fn depth_composes_with_category() {
    assert_eq!(
        pointer("GLfloat", 1),
        TargetType::Mapped {
            category: Category::Float32,
            indirection: 1
        }
    );
    assert_eq!(
        pointer("GLchar", 2),
        TargetType::Mapped {
            category: Category::Int8,
            indirection: 2
        }
    );
}

#[test]
fn debug_proc_ignores_depth() {
    let expected = TargetType::Mapped {
        category: Category::Pointer,
        indirection: 0,
    };
    assert_eq!(value("GLDEBUGPROC"), expected);
    assert_eq!(pointer("GLDEBUGPROC", 1), expected);
}

#[test]
fn unknown_names_are_unmapped() {
    assert_eq!(value("GLDEBUGPROCAMD").category(), Category::Unmapped);
    assert_eq!(pointer("_cl_context", 1), TargetType::Unmapped { indirection: 1 });
    assert!(!value("glfloat").is_mapped());
    assert_eq!(lookup(""), None);
}

#[test]
fn category_names() {
    assert_eq!(Category::Int.target_name(), Some("int"));
    assert_eq!(Category::Uintptr.target_name(), Some("uintptr"));
    assert_eq!(Category::Pointer.target_name(), Some("unsafe.Pointer"));
    assert_eq!(Category::Void.target_name(), None);
    assert_eq!(Category::Unmapped.target_name(), None);
}
