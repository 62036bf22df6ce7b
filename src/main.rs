use std::env;
use std::process;

use anyhow::Context;
use rigo::file;
use rigo::App;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    // 引数は [ファイル名] [ディレクトリ] の最大2つ
    let (filename, directory) = match args.len() {
        1 => ("file.txt".to_string(), ".".to_string()),
        2 => (args[1].clone(), ".".to_string()),
        3 => (args[1].clone(), args[2].clone()),
        _ => {
            eprintln!("Error: Too many arguments");
            eprintln!("Usage: {} [filename] [directory]", args[0]);
            process::exit(1);
        }
    };

    println!("rigo - line-oriented text editor");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let create_dir = args.len() == 3;
    let path = file::resolve_target(&filename, &directory, create_dir)
        .with_context(|| format!("Error: Cannot prepare directory {}", directory))?;

    let mut app = App::open(path.clone())
        .with_context(|| format!("Error: Cannot create/open file {}", path.display()))?;
    app.run()?;

    Ok(())
}
