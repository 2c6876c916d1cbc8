use include_dir::{Dir, DirEntry};

use crate::domain::AppError;

/// An embedded template file.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSource {
    pub name: &'static str,
    pub content: &'static str,
}

pub fn collect_template_sources(dir: &'static Dir<'static>) -> Result<Vec<TemplateSource>, AppError> {
    let mut sources = Vec::new();
    collect_entries(dir, &mut sources)?;
    sources.sort_by(|a, b| a.name.cmp(b.name));
    Ok(sources)
}

fn collect_entries(
    dir: &'static Dir<'static>,
    sources: &mut Vec<TemplateSource>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let name = file.path().to_str().ok_or_else(|| {
                    AppError::template(
                        file.path().to_string_lossy(),
                        "template path is not valid UTF-8",
                    )
                })?;
                if !name.ends_with(".j2") {
                    continue;
                }
                let content = file
                    .contents_utf8()
                    .ok_or_else(|| AppError::template(name, "template is not UTF-8"))?;
                sources.push(TemplateSource { name, content });
            }
            DirEntry::Dir(subdir) => collect_entries(subdir, sources)?,
        }
    }

    Ok(())
}
