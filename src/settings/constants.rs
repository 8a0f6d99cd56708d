/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Address the webhook HTTP server binds to
[server]
listen_address = "0.0.0.0:8443"
# Serve HTTPS when both are set. The API server only talks HTTPS to webhooks.
# tls_cert_path = "/tls/tls.crt"
# tls_key_path = "/tls/tls.key"

# API group the webhook is registered under with cert-manager.
# Can also be set through the GROUP_NAME environment variable.
[webhook]
group_name = "acme.example.com"

# DNSPod (Tencent Cloud API v3) settings
[dnspod]
endpoint = "https://dnspod.tencentcloudapi.com"
region = "ap-guangzhou"
# Retries for rate limited or unreachable calls, with exponential backoff
max_retries = 3
retry_base_delay_ms = 1000

# Kubernetes API access used to read credential secrets.
# Defaults to the in-cluster service account, then KUBECONFIG.
[kubernetes]
# kubeconfig = "/etc/dnspod-webhook/kubeconfig"
# context = "production"
"#;

/// Environment variable pointing at the configuration file.
pub const CONFIG_PATH_ENV: &str = "DNSPOD_WEBHOOK_CONFIG_PATH";

/// Prefix for environment overrides, e.g. `DNSPOD_WEBHOOK__LOG__LEVEL`.
pub const ENV_PREFIX: &str = "DNSPOD_WEBHOOK";

/// cert-manager's conventional variable for the webhook API group.
pub const GROUP_NAME_ENV: &str = "GROUP_NAME";

/// Upper bound on provider retries, to keep a challenge from stalling.
pub const MAX_PROVIDER_RETRIES: u32 = 10;
