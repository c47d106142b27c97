use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ViewerArgs {
    /// Directory holding the exported network CSV files
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Address to serve the viewer on
    #[arg(short, long, default_value = "127.0.0.1:3030")]
    pub listen: SocketAddr,

    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,
}
