//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use anyhow::{Context, Result};
use decant::{Collection, ContentType, ReaderConfig};
use log::{debug, info, warn};
use serde_yaml::{Mapping, Value};

/// Execute the list command
pub fn list_command(args: ListArgs) -> Result<()> {
    debug!("Executing list command with args: {:?}", args);

    let content_type = content_type(&args.collection, Vec::new())?;
    let mut lines: Vec<String> = content_type
        .all()?
        .iter()
        .map(|entry| {
            if args.paths {
                entry.relative_path()
            } else {
                entry.slug()
            }
        })
        .collect();

    if lines.is_empty() {
        warn!("No entries found in {}", args.collection.dir.display());
        return Ok(());
    }

    lines.sort();
    for line in &lines {
        println!("{}", line);
    }
    info!("Listed {} entries", lines.len());
    Ok(())
}

/// Execute the show command
pub fn show_command(args: ShowArgs) -> Result<()> {
    debug!("Executing show command with args: {:?}", args);

    let content_type = content_type(&args.collection, Vec::new())?;
    let entry = content_type.find(&args.pattern)?;
    let frontmatter = entry
        .frontmatter()
        .with_context(|| format!("failed to parse {}", entry.path().display()))?;

    match frontmatter {
        Some(value) => output_value(value, args.format)?,
        None => info!("{} has no frontmatter", entry.relative_path()),
    }

    if args.body {
        print!("{}", entry.content()?);
    }
    Ok(())
}

/// Execute the get command
pub fn get_command(args: GetArgs) -> Result<()> {
    debug!("Executing get command with args: {:?}", args);

    let content_type = content_type(&args.collection, args.keys.clone())?;
    let entry = content_type.find(&args.pattern)?;

    let mut selected = Mapping::new();
    for (key, value) in entry
        .fields()
        .with_context(|| format!("failed to parse {}", entry.path().display()))?
    {
        match value {
            Some(value) => {
                selected.insert(Value::from(key), value.clone());
            }
            None => debug!("{} has no field {}", entry.relative_path(), key),
        }
    }

    if selected.is_empty() {
        info!("No matching values found");
        return Ok(());
    }

    if args.keys.len() == 1 {
        if let Some(value) = selected.values().next() {
            return output_value(value, args.format);
        }
    }
    output_value(&Value::Mapping(selected), args.format)
}

/// Execute the glob command
pub fn glob_command(args: GlobArgs) -> Result<()> {
    debug!("Executing glob command with args: {:?}", args);

    let collection = collection(&args.collection)?;
    let mut paths: Vec<String> = collection
        .glob(&args.pattern)?
        .iter()
        .map(|path| collection.relative_path_for(path))
        .collect();

    paths.sort();
    for path in &paths {
        println!("{}", path);
    }
    info!("Matched {} files", paths.len());
    Ok(())
}

// Helper functions

fn reader_config(options: &CollectionOptions) -> ReaderConfig {
    match options.max_file_size {
        Some(limit) => ReaderConfig {
            max_file_size: Some(limit),
        },
        None => ReaderConfig::default(),
    }
}

fn content_type(options: &CollectionOptions, fields: Vec<String>) -> Result<ContentType> {
    let mut builder = ContentType::builder(&options.dir)
        .frontmatter(fields)
        .follow_links(options.follow_links)
        .include_hidden(options.include_hidden)
        .reader_config(reader_config(options));

    if let Some(ext) = &options.ext {
        builder = builder.ext(ext);
    }

    builder
        .build()
        .with_context(|| format!("invalid collection {}", options.dir.display()))
}

fn collection(options: &CollectionOptions) -> Result<Collection> {
    let collection = Collection::new(&options.dir, options.ext.as_deref())?
        .with_follow_links(options.follow_links)
        .with_hidden(options.include_hidden);
    Ok(collection)
}

fn output_value(value: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => {
            let output = serde_yaml::to_string(value)?;
            print!("{}", output);
        }
        OutputFormat::Json => {
            let output = serde_json::to_string_pretty(value)
                .context("frontmatter cannot be represented as JSON")?;
            println!("{}", output);
        }
    }
    Ok(())
}
