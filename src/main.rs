use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use unsit::SitArchive;

#[derive(Parser, Debug)]
#[command(name = "unsit")]
#[command(version, about = "Classic StuffIt (.sit) archive extractor", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the entries of a StuffIt (.sit) archive
    List {
        /// Path to the StuffIt (.sit) file
        input: String,

        /// Drop folder prefixes and list bare names
        #[arg(short, long)]
        flatten: bool,
    },
    /// Extract a StuffIt (.sit) archive
    Extract {
        /// Path to the StuffIt (.sit) file
        input: String,

        /// Output directory (defaults to current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Drop folder prefixes and extract into a flat directory
        #[arg(short, long)]
        flatten: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Commands::List { input, flatten } => {
            let archive = SitArchive::open_file(&input, flatten)?;
            let mut paths = archive.list();
            paths.sort();
            for path in &paths {
                println!("{}", path);
            }
            println!("{} entries.", paths.len());
        }
        Commands::Extract {
            input,
            output,
            flatten,
            verbose,
        } => {
            let input_path = Path::new(&input);
            if !input_path.exists() {
                eprintln!("Error: File not found: {}", input);
                std::process::exit(1);
            }

            let archive = SitArchive::open_file(input_path, flatten)?;
            let output_base = output
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));

            if !output_base.exists() {
                fs::create_dir_all(&output_base)?;
            }

            let paths = archive.list();
            println!("Unarchiving {} entries...", paths.len());

            // Decompression runs in parallel; the archive serializes the
            // underlying reads internally.
            let errors = AtomicUsize::new(0);
            paths.par_iter().for_each(|path| {
                if let Err(e) = extract_entry(&archive, &output_base, path, verbose) {
                    eprintln!("Error extracting {}: {}", path, e);
                    errors.fetch_add(1, Ordering::Relaxed);
                }
            });

            if errors.load(Ordering::Relaxed) > 0 {
                eprintln!(
                    "Warning: {} entries failed to extract",
                    errors.load(Ordering::Relaxed)
                );
            }
        }
    }

    println!("Done.");
    Ok(())
}

fn extract_entry(
    archive: &SitArchive<std::io::BufReader<fs::File>>,
    base: &Path,
    entry_path: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let data_fork = archive.read(entry_path)?;
    let resource_fork = archive.read_resource_fork(entry_path)?;
    let finder_info = archive.read_finder_info(entry_path);

    let mut name = entry_path.replace(':', "/");

    // The special "Icon" file used for folder icons in Classic Mac OS is
    // stored as "Icon" but must be "Icon\r" on disk.
    if name.ends_with("/Icon") || name == "Icon" {
        name.push('\r');
    }

    let path = base.join(&name);

    if verbose {
        println!(
            "  File: {} (data: {} bytes, rsrc: {} bytes)",
            entry_path,
            data_fork.len(),
            resource_fork.as_ref().map_or(0, |r| r.len())
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(&path)?;
    file.write_all(&data_fork)?;

    #[cfg(target_os = "macos")]
    {
        if let Some(rsrc) = &resource_fork {
            let rsrc_path = path.join("..namedfork/rsrc");
            let _ = fs::write(&rsrc_path, rsrc);
        }

        if let Some(finder) = finder_info {
            let mut info = [0u8; 32];
            info[0..10].copy_from_slice(&finder[0..10]);
            apply_finder_info(&path, &info);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = finder_info;
        if let Some(rsrc) = &resource_fork {
            let mut rsrc_path = path.clone();
            let mut filename = rsrc_path
                .file_name()
                .map(|f| f.to_os_string())
                .unwrap_or_default();
            filename.push(".rsrc");
            rsrc_path.set_file_name(filename);

            let mut rsrc_file = fs::File::create(&rsrc_path)?;
            rsrc_file.write_all(rsrc)?;
        }
    }

    Ok(())
}

#[cfg(target_os = "macos")]
fn apply_finder_info(path: &Path, info: &[u8; 32]) {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(path_c) = CString::new(path.as_os_str().as_bytes()) else {
        return;
    };
    let Ok(attr_c) = CString::new("com.apple.FinderInfo") else {
        return;
    };

    unsafe {
        libc::setxattr(
            path_c.as_ptr(),
            attr_c.as_ptr(),
            info.as_ptr() as *const libc::c_void,
            32,
            0,
            0,
        );
    }
}
