use crate::core::catalog::Catalog;
use crate::core::errors::{Error, Result};
use log::{error, info, warn};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Published location of the AWS IP Ranges document.
pub const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ loads the AWS IP Ranges using the default client
/// configuration (and any `AWSRANGES_*` environment variable overrides). Uses the cache file
/// when present; otherwise fetches the document and caches it.
///
/// ```no_run
/// let catalog = awsranges::get_catalog()?;
///
/// if catalog.contains("3.5.140.1")? {
///     let result = catalog.lookup_services("3.5.140.1")?;
///     println!("{} in {}", result.services.join(", "), result.region);
/// }
/// # Ok::<(), awsranges::Error>(())
/// ```
pub fn get_catalog() -> Result<Catalog> {
    Client::new().load()
}

/// Load a [Catalog] from `cache_file` when `use_cache_if_present` is set and the file exists,
/// otherwise from a single GET of `url`. A fetched document is written verbatim to
/// `cache_file` when one is given. Uses the default [HttpConfig].
pub fn load(cache_file: Option<&Path>, url: &str, use_cache_if_present: bool) -> Result<Catalog> {
    let mut builder = ClientBuilder::default();
    builder.url(url).use_cache(use_cache_if_present);
    match cache_file {
        Some(cache_file) => builder.cache_file(cache_file),
        None => builder.no_cache_file(),
    };
    builder.build().load()
}

/*-------------------------------------------------------------------------------------------------
  HTTP Configuration
-------------------------------------------------------------------------------------------------*/

/// Transport settings for the blocking HTTP client used to fetch the AWS IP Ranges. A value is
/// built once per [Client] and passed explicitly to each fetch.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HttpConfig {
    connect_timeout: Duration,
    timeout: Duration,
    tcp_keepalive: Duration,
    proxy_from_env: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(90),
            tcp_keepalive: Duration::from_secs(30),
            proxy_from_env: true,
        }
    }
}

impl HttpConfig {
    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the TCP connect timeout; defaults to 30 seconds.
    pub fn connect_timeout(&mut self, connect_timeout: Duration) -> &mut Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Set the total request timeout (connect, TLS handshake, and body); defaults to 90
    /// seconds.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Set the TCP keep-alive interval; defaults to 30 seconds.
    pub fn tcp_keepalive(&mut self, tcp_keepalive: Duration) -> &mut Self {
        self.tcp_keepalive = tcp_keepalive;
        self
    }

    /// Use the `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` environment variables; defaults to `true`.
    pub fn proxy_from_env(&mut self, proxy_from_env: bool) -> &mut Self {
        self.proxy_from_env = proxy_from_env;
        self
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn get_connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn get_tcp_keepalive(&self) -> Duration {
        self.tcp_keepalive
    }

    pub fn get_proxy_from_env(&self) -> bool {
        self.proxy_from_env
    }

    /*-------------------------------------------------------------------------
      Build HTTP Client
    -------------------------------------------------------------------------*/

    // One request per invocation, so idle connections are never pooled.
    fn http_client(&self, url: &str) -> Result<reqwest::blocking::Client> {
        let mut builder = reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .tcp_keepalive(self.tcp_keepalive)
            .pool_max_idle_per_host(0);

        if !self.proxy_from_env {
            builder = builder.no_proxy();
        }

        builder.build().map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct that allows you to customize the client configuration.
///
/// ```
/// let client = awsranges::ClientBuilder::new()
///     .url("https://ip-ranges.amazonaws.com/ip-ranges.json")
///     .cache_file("/tmp/ip-ranges.json")
///     .use_cache(false)
///     .build();
///
/// assert!(!client.use_cache());
/// ```
///
/// The [ClientBuilder::new] method attempts to source configuration values from environment
/// variables when set and uses default values when the environment variables are not set.
/// [ClientBuilder::default] ignores the environment.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
    cache_file: Option<PathBuf>,
    use_cache: bool,
    http_config: HttpConfig,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = awsranges::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://ip-ranges.amazonaws.com/ip-ranges.json");
    /// assert_eq!(
    ///     client.cache_file(),
    ///     dirs::home_dir().map(|home| home.join(".aws").join("ip-ranges.json")).as_deref()
    /// );
    /// assert!(client.use_cache());
    /// ```
    fn default() -> Self {
        Self {
            url: AWS_IP_RANGES_URL.to_string(),
            cache_file: default_cache_file(),
            use_cache: true,
            http_config: HttpConfig::default(),
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when the environment
    /// variables are not set.
    ///
    /// The environment variables used to set the initial configuration values
    /// are:
    /// - `AWSRANGES_URL`
    /// - `AWSRANGES_CACHE_FILE`
    /// - `AWSRANGES_USE_CACHE` (`true` or `false`)
    /// - `AWSRANGES_CONNECT_TIMEOUT` (seconds)
    /// - `AWSRANGES_TIMEOUT` (seconds)
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        let mut http_config = default.http_config.clone();
        http_config
            .connect_timeout(Duration::from_secs(get_env_var(
                "AWSRANGES_CONNECT_TIMEOUT",
                default.http_config.connect_timeout.as_secs(),
            )))
            .timeout(Duration::from_secs(get_env_var(
                "AWSRANGES_TIMEOUT",
                default.http_config.timeout.as_secs(),
            )));

        Self {
            url: get_env_var("AWSRANGES_URL", default.url),
            cache_file: env::var("AWSRANGES_CACHE_FILE")
                .ok()
                .filter(|value| !value.is_empty())
                .map(|value| {
                    info!("Using AWSRANGES_CACHE_FILE: {}", value);
                    PathBuf::from(value)
                })
                .or(default.cache_file),
            use_cache: get_env_var("AWSRANGES_USE_CACHE", default.use_cache),
            http_config,
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL used to retrieve the AWS IP Ranges; defaults to
    /// `https://ip-ranges.amazonaws.com/ip-ranges.json` - see
    /// [AWS IP address ranges](https://docs.aws.amazon.com/vpc/latest/userguide/aws-ip-ranges.html)
    /// in the Amazon Virtual Private Cloud (VPC) User Guide for details.
    pub fn url<'s>(&'s mut self, url: &str) -> &'s mut Self {
        self.url = url.to_string();
        self
    }

    /// Set the file path used to cache the AWS IP Ranges JSON; defaults to
    /// `${HOME}/.aws/ip-ranges.json`.
    pub fn cache_file<P: AsRef<Path>>(&mut self, cache_file: P) -> &mut Self {
        self.cache_file = Some(cache_file.as_ref().to_path_buf());
        self
    }

    /// Disable the cache file; every load fetches the document and nothing is written.
    pub fn no_cache_file(&mut self) -> &mut Self {
        self.cache_file = None;
        self
    }

    /// Read the cache file, when it exists, instead of fetching the document; defaults to
    /// `true`. The cached document is trusted regardless of its age. When `false` the document
    /// is always fetched (and still written to the cache file).
    pub fn use_cache(&mut self, use_cache: bool) -> &mut Self {
        self.use_cache = use_cache;
        self
    }

    /// Set the HTTP transport configuration.
    pub fn http_config(&mut self, http_config: HttpConfig) -> &mut Self {
        self.http_config = http_config;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
            cache_file: self.cache_file.clone(),
            use_cache: self.use_cache,
            http_config: self.http_config.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for loading the AWS IP Ranges from the cache file, when present, or from the URL.
///
/// ```no_run
/// let client = awsranges::Client::new();
/// let catalog = client.load()?;
/// # Ok::<(), awsranges::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    cache_file: Option<PathBuf>,
    use_cache: bool,
    http_config: HttpConfig,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Get the URL used to retrieve the AWS IP Ranges.
    ///
    /// ```
    /// let client = awsranges::Client::default();
    /// assert_eq!(client.url(), "https://ip-ranges.amazonaws.com/ip-ranges.json");
    /// ```
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the file path used to cache the AWS IP Ranges JSON, if any.
    pub fn cache_file(&self) -> Option<&Path> {
        self.cache_file.as_deref()
    }

    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    pub fn http_config(&self) -> &HttpConfig {
        &self.http_config
    }

    /*-------------------------------------------------------------------------
      Load Catalog
    -------------------------------------------------------------------------*/

    /// Load and parse the AWS IP Ranges into a [Catalog]. Reads the cache file when caching is
    /// enabled and the file exists; otherwise performs a single GET of the URL and writes the
    /// received bytes to the cache file (when configured).
    ///
    /// Errors are never recovered from: a failed fetch, an unreadable or unwritable cache file,
    /// or an unparsable document fails the load.
    pub fn load(&self) -> Result<Catalog> {
        if let Some(cache_file) = self.cached_file() {
            let json = self.get_json_from_file(cache_file)?;
            return Catalog::from_json(&json);
        }

        let json = self.get_json_from_url()?;
        let catalog = Catalog::from_json(&json)?;
        if let Some(cache_file) = &self.cache_file {
            self.cache_json_to_file(cache_file, &json)?;
        }

        Ok(catalog)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// The cache file to read, if caching is enabled and the file exists.
    fn cached_file(&self) -> Option<&Path> {
        let cache_file = self.cache_file.as_deref()?;
        info!("Cache file path: {:?}", cache_file);

        if !self.use_cache {
            info!("Cache disabled; refresh cache");
            return None;
        }

        // Check if cache file exists
        if fs::metadata(cache_file).is_ok() {
            info!("Cache file exists");
            Some(cache_file)
        } else {
            info!("Cache file not found");
            None
        }
    }

    /// Get the AWS IP Ranges JSON from the URL.
    fn get_json_from_url(&self) -> Result<Vec<u8>> {
        info!("Get AWS IP Ranges from URL: GET {}", self.url);

        let network_error = |source: reqwest::Error| Error::Network {
            url: self.url.clone(),
            source,
        };

        self.http_config
            .http_client(&self.url)?
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map(|bytes| bytes.to_vec())
            .map_err(network_error)
            .inspect(|json| info!("Get AWS IP Ranges from URL: Ok ({} bytes)", json.len()))
            .inspect_err(|error| error!("Get AWS IP Ranges from URL: FAILED: {}", error))
    }

    /// Write the AWS IP Ranges JSON to the cache file.
    fn cache_json_to_file(&self, cache_file: &Path, json: &[u8]) -> Result<()> {
        let cache_io_error = |source: std::io::Error| Error::CacheIo {
            path: cache_file.to_path_buf(),
            source,
        };

        // Ensure parent directories exist
        if let Some(parent) = cache_file.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(cache_io_error)?;
        }

        fs::write(cache_file, json)
            .map_err(cache_io_error)
            .inspect(|_| info!("Successfully cached AWS IP Ranges to: {:?}", cache_file))
            .inspect_err(|error| error!("Failed to cache AWS IP Ranges: {}", error))
    }

    /// Get the AWS IP Ranges JSON from the cache file.
    fn get_json_from_file(&self, cache_file: &Path) -> Result<Vec<u8>> {
        fs::read(cache_file)
            .map_err(|source| Error::CacheIo {
                path: cache_file.to_path_buf(),
                source,
            })
            .inspect(|_| info!("Successfully read AWS IP Ranges JSON from: {:?}", cache_file))
            .inspect_err(|error| error!("Failed to read AWS IP Ranges JSON: {}", error))
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// `${HOME}/.aws/ip-ranges.json`, or no cache file when the home directory is unknown.
fn default_cache_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aws").join("ip-ranges.json"))
}

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
