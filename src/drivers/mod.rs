pub mod pinmux;
