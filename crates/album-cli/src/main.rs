use album_layout::{
    Album, EditorOptions, Frame, PageEditor, Pagination, RenderSurface, RightSlot, View,
    ViewMode, builtin_templates, calculate_statistics, default_layout, find_template, load_album,
    parse_page_count, plan_page_count, render_page, target_page_count,
};
use album_runtime::{AlbumCommand, AlbumUpdate, MemoryAlbumApi, worker_task};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "albumctl", about = "Photo album layout tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show page, photo and view counts for an album
    Stats {
        /// Album JSON file
        album: PathBuf,

        /// View mode used to count views
        #[arg(long, default_value = "spreads", value_enum)]
        mode: ModeArg,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the navigable views of an album
    Views {
        /// Album JSON file
        album: PathBuf,

        #[arg(long, default_value = "spreads", value_enum)]
        mode: ModeArg,
    },

    /// List built-in page templates
    Templates {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Place a page's photos into a template's slots
    ApplyTemplate {
        /// Album JSON file
        album: PathBuf,

        /// Page number (1-based, in page order)
        #[arg(short, long)]
        page: usize,

        /// Template id (see `templates`)
        #[arg(short, long)]
        template: String,

        /// Write the updated album here instead of printing the layouts
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Plan (or apply) a change of page count
    Pages {
        /// Album JSON file
        album: PathBuf,

        /// Requested page count; invalid input keeps the current count
        #[arg(short, long)]
        count: String,

        /// Write the resized album here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default grid cells for a number of photos
    Grid {
        #[arg(short, long, default_value = "4")]
        count: usize,
    },

    /// Print the boxes of one page as drawn on a surface
    Scene {
        /// Album JSON file
        album: PathBuf,

        /// Page number (1-based, in page order)
        #[arg(short, long)]
        page: usize,

        #[arg(long, default_value = "editor", value_enum)]
        surface: SurfaceArg,
    },

    /// Check an editor options file, or print the defaults
    Options {
        /// Options JSON file
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Spreads,
    Single,
}

#[derive(Clone, Copy, ValueEnum)]
enum SurfaceArg {
    Editor,
    Shared,
    FlipPage,
    FlipSpread,
}

impl From<ModeArg> for ViewMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Spreads => Self::Spreads,
            ModeArg::Single => Self::SinglePages,
        }
    }
}

impl From<SurfaceArg> for RenderSurface {
    fn from(arg: SurfaceArg) -> Self {
        match arg {
            SurfaceArg::Editor => Self::EditorCanvas,
            SurfaceArg::Shared => Self::SharedView,
            SurfaceArg::FlipPage => Self::FlipBookPage,
            SurfaceArg::FlipSpread => Self::FlipBookSpread,
        }
    }
}

fn format_frame(frame: &Frame) -> String {
    let mut s = format!(
        "x={:.1} y={:.1} w={:.1} h={:.1}",
        frame.x, frame.y, frame.w, frame.h
    );
    if frame.rotation != 0.0 {
        s.push_str(&format!(" rot={:.0}°", frame.rotation));
    }
    s
}

/// Run commands against an in-memory copy of `album` and return the
/// updates plus the album's final state
async fn run_commands(
    album: Album,
    commands: Vec<AlbumCommand>,
) -> Result<(Vec<AlbumUpdate>, Album)> {
    let album_id = album.id.clone();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();

    let worker = tokio::spawn(worker_task(
        MemoryAlbumApi::new(album),
        album_id,
        command_rx,
        update_tx,
    ));

    for cmd in commands {
        command_tx.send(cmd)?;
    }
    command_tx.send(AlbumCommand::LoadAlbum)?;
    drop(command_tx);

    let mut updates = Vec::new();
    while let Some(update) = update_rx.recv().await {
        match update {
            AlbumUpdate::Error { message, .. } => bail!(message),
            AlbumUpdate::PageSaveFailed {
                page_id, message, ..
            } => bail!("Failed to save page {}: {}", page_id, message),
            other => updates.push(other),
        }
    }
    worker.await?;

    match updates.pop() {
        Some(AlbumUpdate::AlbumLoaded { album }) => Ok((updates, album)),
        _ => bail!("Worker stopped before reloading the album"),
    }
}

async fn write_album(album: &Album, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(album)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

async fn read_album(path: &Path) -> Result<Album> {
    load_album(path)
        .await
        .with_context(|| format!("Failed to read album {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { album, mode, json } => {
            let album = read_album(&album).await?;
            let stats = calculate_statistics(&album, mode.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }
            println!("Album Statistics:");
            println!("  Pages: {}", stats.pages);
            println!("  Spreads: {}", stats.spreads);
            println!("  Views: {}", stats.views);
            println!("  Flip-book targets: {}", stats.flip_targets);
            println!("  Photos: {}", stats.photos);
            println!("  Stickers: {}", stats.stickers);
            println!("  Texts: {}", stats.texts);
            println!("  Empty pages: {}", stats.empty_pages);
            println!("  Overlapping photo pairs: {}", stats.overlapping_photo_pairs);
        }

        Commands::Views { album, mode } => {
            let album = read_album(&album).await?;
            let pagination = Pagination::new(&album.pages, mode.into());
            for (index, view) in pagination.views().enumerate() {
                let label = pagination.label(index).unwrap_or_default();
                let pages = match view {
                    View::Spread { left, right, .. } => {
                        let left = left.map_or("-", |p| p.id.as_str());
                        let right = match right {
                            RightSlot::Page(page) => page.id.as_str(),
                            RightSlot::AddPage => "[add page]",
                        };
                        format!("{} | {}", left, right)
                    }
                    View::Page { page, .. } => page.id.clone(),
                    View::Cover | View::BackCover => String::new(),
                };
                println!("{:>3}  {:<14} {}", index, label, pages);
            }
        }

        Commands::Templates { json } => {
            let templates = builtin_templates();
            if json {
                println!("{}", serde_json::to_string_pretty(&templates)?);
                return Ok(());
            }
            for template in templates {
                println!("{} ({})", template.id, template.name);
                for (slot, frame) in template.slots.iter().enumerate() {
                    println!("  slot {}: {}", slot, format_frame(frame));
                }
            }
        }

        Commands::ApplyTemplate {
            album: album_path,
            page,
            template,
            output,
        } => {
            let album = read_album(&album_path).await?;
            let template = find_template(&template)?;
            let page = album.page_by_number(page)?;

            let mut editor = PageEditor::new(page, EditorOptions::default());
            editor.apply_template(&template);
            let photo_ids: Vec<String> = editor.photos().iter().map(|p| p.id.clone()).collect();
            for (slot, photo_id) in photo_ids.iter().enumerate().take(template.slots.len()) {
                editor.assign_photo_to_slot(slot, photo_id);
            }
            let leftover = editor.unassigned_photos().len();
            if leftover > 0 {
                log::warn!(
                    "{} photo(s) did not fit into template {}",
                    leftover,
                    template.id
                );
            }

            let plan = editor.save_plan();
            for (photo_id, layout) in &plan.layouts {
                println!("{:<12} {}", photo_id, format_frame(&layout.frame));
            }

            if let Some(output) = output {
                let (_, album) =
                    run_commands(album, vec![AlbumCommand::SavePage { plan }]).await?;
                write_album(&album, &output).await?;
                println!("Applied {} → {}", template.id, output.display());
            }
        }

        Commands::Pages {
            album: album_path,
            count,
            output,
        } => {
            let album = read_album(&album_path).await?;
            let requested = parse_page_count(&count);
            let target = target_page_count(requested, album.pages.len());
            let ops = plan_page_count(&album.pages, target);
            println!(
                "{} → {} pages ({} operations)",
                album.pages.len(),
                target,
                ops.len()
            );
            for op in &ops {
                println!("  {:?}", op);
            }

            if let Some(output) = output {
                let (_, album) =
                    run_commands(album, vec![AlbumCommand::SetPageCount { requested }]).await?;
                write_album(&album, &output).await?;
                println!("Resized → {}", output.display());
            }
        }

        Commands::Grid { count } => {
            for index in 0..count {
                println!("{:>3}  {}", index, format_frame(&default_layout(index)));
            }
        }

        Commands::Scene {
            album,
            page,
            surface,
        } => {
            let album = read_album(&album).await?;
            let scene = render_page(album.page_by_number(page)?, surface.into());
            println!("Page {} on {:?}, background {}", scene.page_id, scene.surface, scene.background);
            for photo in &scene.photos {
                print!("  photo {:<12} {}", photo.photo_id, format_frame(&photo.frame));
                if let Some(crop) = photo.crop {
                    print!(
                        " image {:.1}%x{:.1}% at {:.1}%,{:.1}%",
                        crop.width_pct, crop.height_pct, crop.left_pct, crop.top_pct
                    );
                }
                println!();
            }
            for sticker in &scene.stickers {
                println!("  sticker {:<10} {}", sticker.path, format_frame(&sticker.frame));
            }
            for text in &scene.texts {
                println!(
                    "  text \"{}\" at {:.1},{:.1} size {:.0} {}",
                    text.content, text.x, text.y, text.font_size, text.color
                );
            }
        }

        Commands::Options { path } => {
            let options = match path {
                Some(path) => EditorOptions::load(&path).await?,
                None => EditorOptions::default(),
            };
            options.validate()?;
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}
