mod activity;
mod camper;
mod signup;
