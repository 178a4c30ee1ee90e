//! Build a small tree, list it level by level, then tear it down.
//!
//! Run with: `cargo run --example tree_ops`

use fstree::{File, FileFlags, FileType, FsError, Path, Permissions};

fn print_tree(dir: &File, depth: usize) -> Result<(), FsError> {
    dir.iterate_directory(|child, name| {
        let kind = match child.classify()? {
            FileType::Directory => "dir",
            FileType::Regular => "file",
            FileType::Symlink => "link",
            FileType::Unknown => "other",
            FileType::Missing => "gone",
        };
        println!(
            "{:indent$}{} ({kind})",
            "",
            name.to_string_lossy(),
            indent = depth * 2
        );

        if kind == "dir" {
            // The child is reused for the next entry, so recurse on a copy.
            print_tree(&child.clone(), depth + 1)?;
        }
        Ok(())
    })
}

fn main() -> Result<(), FsError> {
    let root = Path::from(std::env::temp_dir()).join("fstree-demo");

    // mkdir -p
    for dir in ["docs/guides", "src/bin"] {
        File::new(root.join(dir)).mkdir(Permissions::default_dir(), FileFlags::ALL)?;
    }
    for file in ["docs/README", "src/lib.rs", "src/bin/main.rs"] {
        let path = root.join(file);
        std::fs::write(path.as_std_path(), b"")
            .map_err(|e| FsError::system("write", path.as_std_path(), e))?;
    }

    println!("{root}");
    print_tree(&File::new(root.clone()), 1)?;

    // rm -r
    let mut top = File::new(root);
    top.remove(FileFlags::RECURSIVE)?;
    println!("removed: {}", !top.exists()?);
    Ok(())
}
