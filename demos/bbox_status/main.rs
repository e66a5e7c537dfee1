use bbox_client::{BboxClient, BboxResult, NatProtocol, NatRule};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Query and manage a Bbox router", long_about = None)]
struct Cli {
    /// Router address: a LAN IP or mabbox.bytel.fr
    #[arg(short = 'a', long, default_value = bbox_client::DEFAULT_LOCAL_ADDRESS)]
    address: String,

    /// Administrator password, needed for private calls
    #[arg(short = 'p', long, env = "BBOX_PASSWORD")]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line state, bitrates and bandwidth usage
    Status,
    /// Devices in the host table
    Hosts,
    /// Set the front panel brightness
    Display { luminosity: i32 },
    /// Forward a UDP or TCP port to a LAN address
    Forward {
        ipaddress: String,
        port: u16,
        #[arg(long)]
        udp: bool,
    },
    /// Reboot the router
    Reboot,
}

async fn status(client: &BboxClient) -> BboxResult<()> {
    let xdsl = client.get_xdsl_info().await?;
    println!("Line: {}", xdsl.state);
    println!("Up:   {:.2} Mbps", xdsl.up.mbps());
    println!("Down: {:.2} Mbps", xdsl.down.mbps());
    println!("Upload used:   {}%", client.get_up_used_bandwidth().await?);
    println!("Download used: {}%", client.get_down_used_bandwidth().await?);
    Ok(())
}

#[tokio::main]
async fn main() -> BboxResult<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let mut client = BboxClient::builder().address(&cli.address).build()?;

    if let Some(password) = &cli.password {
        if !client.login(password).await? {
            log::error!("login refused");
        }
    }

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => status(&client).await?,
        Commands::Hosts => {
            for host in client.get_all_connected_devices().await? {
                let state = if host.is_active() { "up" } else { "down" };
                println!(
                    "{:<16} {:<18} {:<5} {}",
                    host.ipaddress.as_deref().unwrap_or("-"),
                    host.macaddress.as_deref().unwrap_or("-"),
                    state,
                    host.hostname.as_deref().unwrap_or("")
                );
            }
        }
        Commands::Display { luminosity } => client.set_display_luminosity(luminosity).await?,
        Commands::Forward {
            ipaddress,
            port,
            udp,
        } => {
            let protocol = if udp { NatProtocol::Udp } else { NatProtocol::Tcp };
            let rule = NatRule::builder()
                .enable(true)
                .description(format!("{protocol} {port}"))
                .protocol(protocol)
                .ipaddress(ipaddress)
                .internal_port(port)
                .build()?;
            println!("created: {}", client.create_nat_rule(rule).await?);
        }
        Commands::Reboot => client.reboot().await?,
    }

    if client.is_authenticated() {
        client.logout().await?;
    }

    Ok(())
}
