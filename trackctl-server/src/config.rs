//! Server configuration

use std::fmt;
use std::net::SocketAddr;

/// Default HTTP port (REST and GraphQL)
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default gRPC port
pub const DEFAULT_GRPC_PORT: u16 = 50051;

/// One of the three transports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Rest,
    Graphql,
    Grpc,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Graphql => "graphql",
            Self::Grpc => "grpc",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which transports to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surfaces {
    pub rest: bool,
    pub graphql: bool,
    pub grpc: bool,
}

impl Surfaces {
    pub const fn all() -> Self {
        Self {
            rest: true,
            graphql: true,
            grpc: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            rest: false,
            graphql: false,
            grpc: false,
        }
    }

    pub fn only(surface: Surface) -> Self {
        Self::none().with(surface)
    }

    pub fn with(mut self, surface: Surface) -> Self {
        match surface {
            Surface::Rest => self.rest = true,
            Surface::Graphql => self.graphql = true,
            Surface::Grpc => self.grpc = true,
        }
        self
    }

    pub fn contains(&self, surface: Surface) -> bool {
        match surface {
            Surface::Rest => self.rest,
            Surface::Graphql => self.graphql,
            Surface::Grpc => self.grpc,
        }
    }

    /// REST and GraphQL share the HTTP listener
    pub fn needs_http(&self) -> bool {
        self.rest || self.graphql
    }

    pub fn is_empty(&self) -> bool {
        !(self.rest || self.graphql || self.grpc)
    }
}

impl Default for Surfaces {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Surface> for Surfaces {
    fn from_iter<T: IntoIterator<Item = Surface>>(iter: T) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listener for REST and GraphQL (default: 127.0.0.1:3000)
    pub http_addr: SocketAddr,

    /// gRPC listener (default: 127.0.0.1:50051)
    pub grpc_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,

    pub surfaces: Surfaces,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_HTTP_PORT)),
            grpc_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_GRPC_PORT)),
            cors_permissive: false,
            surfaces: Surfaces::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_addr.port(), 3000);
        assert_eq!(config.grpc_addr.port(), 50051);
        assert!(!config.cors_permissive);
        assert_eq!(config.surfaces, Surfaces::all());
    }

    #[test]
    fn surfaces_from_list() {
        let surfaces: Surfaces = [Surface::Rest, Surface::Grpc].into_iter().collect();
        assert!(surfaces.rest && surfaces.grpc && !surfaces.graphql);
        assert!(surfaces.needs_http());

        let grpc_only = Surfaces::only(Surface::Grpc);
        assert!(!grpc_only.needs_http());
        assert!(Surfaces::none().is_empty());
    }
}
