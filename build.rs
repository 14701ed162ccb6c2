// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)

use std::fs;
use std::path::Path;

use clap::CommandFactory;

#[allow(dead_code)]
#[path = "src/version.rs"]
mod version;

include!("src/cli.rs");

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");
    println!("cargo::rerun-if-changed=src/version.rs");

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer: Vec<u8> = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo::warning=failed to render man page: {e}");
        return;
    }

    // Silently skip if the source tree is read-only
    let man_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("man");
    if fs::create_dir_all(&man_dir).is_ok() {
        let _ = fs::write(man_dir.join("canijb.1"), buffer);
    }
}
