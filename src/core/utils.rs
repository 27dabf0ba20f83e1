/*-------------------------------------------------------------------------------------------------
  Utilities
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  IP Network Supplemental Functions
--------------------------------------------------------------------------------------*/

pub mod ipnetwork {
    use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

    /*
        The IpNetwork type does not reduce (or provide a method to reduce) an
        interface CIDR prefix (e.g. `10.1.2.3/8`) to its network prefix (where
        all host bits are set to `0`). It does provide a network() method that
        will extract the network IP.
    */

    pub fn network_prefix(ip_network: &IpNetwork) -> IpNetwork {
        match ip_network {
            IpNetwork::V4(ipv4_network) => IpNetwork::V4(
                Ipv4Network::new(ipv4_network.network(), ipv4_network.prefix())
                    .unwrap_or(*ipv4_network),
            ),
            IpNetwork::V6(ipv6_network) => IpNetwork::V6(
                Ipv6Network::new(ipv6_network.network(), ipv6_network.prefix())
                    .unwrap_or(*ipv6_network),
            ),
        }
    }

    /*
        The Ipv4Network and Ipv6Network types implement an is_supernet_of() method;
        however, the IpNetwork type does not.

        This helper function implements the is_supernet_of() functionality to
        compare two IpNetwork objects. Both networks are reduced to their network
        prefixes first; networks of different address families never match.
    */

    pub fn is_supernet_of(supernet: IpNetwork, subnet: IpNetwork) -> bool {
        match (network_prefix(&supernet), network_prefix(&subnet)) {
            (IpNetwork::V4(ipv4_supernet), IpNetwork::V4(ipv4_subnet)) => {
                ipv4_supernet.is_supernet_of(ipv4_subnet)
            }
            (IpNetwork::V6(ipv6_supernet), IpNetwork::V6(ipv6_subnet)) => {
                ipv6_supernet.is_supernet_of(ipv6_subnet)
            }
            _ => false,
        }
    }

    pub fn same_family(a: &IpNetwork, b: &IpNetwork) -> bool {
        a.is_ipv4() == b.is_ipv4()
    }

    /*--------------------------------------------------------------------------
      Unit Tests
    --------------------------------------------------------------------------*/

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_network_prefix() {
            let interface: IpNetwork = "10.1.2.3/8".parse().unwrap();
            let network: IpNetwork = "10.0.0.0/8".parse().unwrap();
            assert_eq!(network_prefix(&interface), network);

            let interface: IpNetwork = "2001:db8::1/32".parse().unwrap();
            let network: IpNetwork = "2001:db8::/32".parse().unwrap();
            assert_eq!(network_prefix(&interface), network);
        }

        #[test]
        fn test_is_supernet_of() {
            let supernet: IpNetwork = "13.32.0.0/15".parse().unwrap();

            assert!(is_supernet_of(supernet, "13.32.0.0/16".parse().unwrap()));
            assert!(is_supernet_of(supernet, "13.33.255.0/24".parse().unwrap()));
            assert!(is_supernet_of(supernet, supernet));
            assert!(!is_supernet_of(supernet, "13.32.0.0/14".parse().unwrap()));
            assert!(!is_supernet_of(supernet, "13.34.0.0/16".parse().unwrap()));
            assert!(!is_supernet_of(supernet, "::/0".parse().unwrap()));
        }

        #[test]
        fn test_same_family() {
            let ipv4: IpNetwork = "10.0.0.0/8".parse().unwrap();
            let ipv6: IpNetwork = "2001:db8::/32".parse().unwrap();
            assert!(same_family(&ipv4, &ipv4));
            assert!(!same_family(&ipv4, &ipv6));
        }
    }
}
