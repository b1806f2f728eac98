mod cors;
mod helpers;
