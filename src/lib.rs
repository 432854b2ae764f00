pub mod configuration;

pub mod math {
    pub mod function {
        pub mod univariatefunction;
        pub mod bivariatefunction;
    }

    pub mod integration {
        pub mod integrationerror;
        pub mod integrator1d;
        pub mod integrator2d;
        pub mod rule1d;
    }
}
