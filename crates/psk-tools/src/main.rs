//! `psk_inspect`: decode a PSK file and print a summary of its contents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use psk_core::Asset;

#[derive(Parser)]
#[command(name = "psk_inspect", about = "Inspect a PSK/PSKX skeletal mesh file")]
struct Args {
    /// Path to a .psk or .pskx file
    file: PathBuf,

    /// Print the bone hierarchy
    #[arg(long)]
    bones: bool,

    /// Print per-material face ranges
    #[arg(long)]
    materials: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let asset = match psk_io::read_psk(&args.file) {
        Ok(asset) => asset,
        Err(e) => {
            eprintln!("error: {}: {e}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    print_summary(&args.file.display().to_string(), &asset);
    if args.materials {
        print_materials(&asset);
    }
    if args.bones {
        print_bones(&asset);
    }
    ExitCode::SUCCESS
}

fn print_summary(name: &str, asset: &Asset) {
    println!("{name}:");
    println!("  vertices:  {}", asset.vertices.len());
    println!("  wedges:    {}", asset.wedges.len());
    println!("  faces:     {}", asset.faces.len());
    println!("  materials: {}", asset.materials.len());
    if asset.is_skeletal() {
        println!("  bones:     {}", asset.bones.len());
        println!(
            "  skinned vertices: {} ({} weight records)",
            asset.weights.len(),
            asset.raw_weights.len()
        );
    } else {
        println!("  static mesh (no skeleton)");
    }
}

fn print_materials(asset: &Asset) {
    println!("materials:");
    for (i, material) in asset.materials.iter().enumerate() {
        match asset.material_ranges[i] {
            Some(range) => println!(
                "  [{i}] {} -> faces {}..={}",
                material.name, range.first, range.last
            ),
            None => println!("  [{i}] {} -> no faces", material.name),
        }
    }
}

fn print_bones(asset: &Asset) {
    if !asset.is_skeletal() {
        return;
    }
    println!("bones:");
    let children = asset.bone_children();
    // (bone index, depth), depth-first.
    let mut stack = vec![(0usize, 0usize)];
    let mut visited = vec![false; asset.bones.len()];
    while let Some((i, depth)) = stack.pop() {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        println!("  {:indent$}[{i}] {}", "", asset.bones[i].name, indent = depth * 2);
        for &child in children[i].iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    for (i, seen) in visited.iter().enumerate() {
        if !seen {
            println!("  (unreachable) [{i}] {}", asset.bones[i].name);
        }
    }
}
