use std::fs;
use std::path::Path;

/// File name used when generating a template in the working directory.
pub const TEMPLATE_FILE_NAME: &str = "template.csv";

/// Sample inventory with two groupable hosts and one network.
pub const TEMPLATE_CSV: &str = "hostname,ip address,Subnetmask,comment\n\
example-host01,192.168.1.1,255.255.255.255,host\n\
example-host02,192.168.1.2,255.255.255.255,host\n\
example-network,192.168.0.0,255.255.0.0,network\n";

/// Usage text printed when no inventory file is given.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <csv_file>

This tool converts a CSV file to a firewall configuration file.

Expected CSV format:
The CSV file must have the following columns:
  - hostname: Name of the host (e.g., mc-core-api01)
  - ip address: IP address of the host (e.g., 172.80.11.32)
  - Subnetmask: Subnet mask (e.g., 255.255.255.255 for /32, 255.255.0.0 for /16)
  - comment: Optional comment (e.g., host, network; leave blank if not needed)

Example CSV content:
hostname,ip address,Subnetmask,comment
mc-core-api01,172.80.11.32,255.255.255.255,host
mc-core-api02,172.80.11.33,255.255.255.255,host
AWS-ZONE,172.70.0.0,255.255.0.0,network"
    )
}

pub fn write_template(path: &Path) -> std::io::Result<()> {
    fs::write(path, TEMPLATE_CSV)
}
