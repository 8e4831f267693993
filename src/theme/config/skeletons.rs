/// Skeleton `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# skindeals settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Unknown keys are ignored.\n\
#\n\
# Backend origin (scheme://host:port)\n\
base_url = http://127.0.0.1:5000\n\
#\n\
# Number of deals requested per search (1-50)\n\
max_results = 12\n\
#\n\
# Initial toggle states on the search bar\n\
use_location_default = false\n\
match_profile_default = false\n\
#\n\
# Seconds before inline messages disappear\n\
alert_dismiss_secs = 5\n\
#\n\
# Delays around login/signup (milliseconds)\n\
login_refresh_delay_ms = 1000\n\
prompt_delay_ms = 500\n\
#\n\
# Image service used for cards without a product image\n\
placeholder_image_base = https://via.placeholder.com/300x200/6366F1/FFFFFF\n";
