//! LLVM backend.
//!
//! Lowers a module to LLVM IR using inkwell. Every value, parameter and
//! return type is `i32`; unit lowers to `i32 0`.

use inkwell::{
    builder::{Builder, BuilderError},
    context::Context,
    module::{Linkage, Module},
    types::BasicMetadataTypeEnum,
    values::{BasicMetadataValueEnum, FunctionValue, IntValue},
};

use crate::{
    ast::ast::FuncProto,
    errors::errors::{CodegenError, CodegenResult},
};

use super::compiler::Backend;

#[derive(Debug, Clone, Copy)]
pub enum LlvmValue<'ctx> {
    Function(FunctionValue<'ctx>),
    Int(IntValue<'ctx>),
}

/// Holds the LLVM module being built and the builder positioned in the
/// current function.
pub struct LlvmBackend<'ctx> {
    /// Reference to the LLVM context
    context: &'ctx Context,
    module: Module<'ctx>,
    builder: Builder<'ctx>,
}

fn builder_error(error: BuilderError) -> CodegenError {
    CodegenError::backend(error.to_string())
}

impl<'ctx> LlvmBackend<'ctx> {
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        LlvmBackend {
            context,
            module: context.create_module(module_name),
            builder: context.create_builder(),
        }
    }

    pub fn module(&self) -> &Module<'ctx> {
        &self.module
    }

    /// Runs the LLVM verifier over the whole module.
    pub fn verify(&self) -> CodegenResult<()> {
        self.module
            .verify()
            .map_err(|message| CodegenError::backend(message.to_string()))
    }

    /// The textual IR of the module.
    pub fn print_to_string(&self) -> String {
        self.module.print_to_string().to_string()
    }

    fn int_value(&self, value: LlvmValue<'ctx>) -> CodegenResult<IntValue<'ctx>> {
        match value {
            LlvmValue::Int(value) => Ok(value),
            LlvmValue::Function(function) => Err(CodegenError::backend(format!(
                "function `{}` used as a value",
                function.get_name().to_string_lossy()
            ))),
        }
    }

    fn function_value(&self, value: &LlvmValue<'ctx>) -> CodegenResult<FunctionValue<'ctx>> {
        match value {
            LlvmValue::Function(function) => Ok(*function),
            LlvmValue::Int(value) => Err(CodegenError::NotCallable {
                name: value_name(value),
            }),
        }
    }
}

fn value_name(value: &IntValue) -> String {
    let name = value.get_name().to_string_lossy();
    if name.is_empty() {
        String::from("<value>")
    } else {
        name.into_owned()
    }
}

impl<'ctx> Backend for LlvmBackend<'ctx> {
    type Value = LlvmValue<'ctx>;

    fn declare_function(&mut self, proto: &FuncProto) -> CodegenResult<Self::Value> {
        let i32_type = self.context.i32_type();
        let params: Vec<BasicMetadataTypeEnum> =
            vec![i32_type.into(); proto.arg_names.len()];
        let function_type = i32_type.fn_type(&params, false);

        let function =
            self.module
                .add_function(&proto.name, function_type, Some(Linkage::External));
        for (param, name) in function.get_param_iter().zip(&proto.arg_names) {
            param.into_int_value().set_name(name);
        }

        Ok(LlvmValue::Function(function))
    }

    fn begin_function(
        &mut self,
        function: &Self::Value,
        _proto: &FuncProto,
    ) -> CodegenResult<Vec<Self::Value>> {
        let function = self.function_value(function)?;
        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        Ok(function
            .get_param_iter()
            .map(|param| LlvmValue::Int(param.into_int_value()))
            .collect())
    }

    fn finish_function(&mut self, function: &Self::Value, body: Self::Value) -> CodegenResult<()> {
        let function = self.function_value(function)?;
        let body = self.int_value(body)?;
        self.builder
            .build_return(Some(&body))
            .map_err(builder_error)?;

        if !function.verify(false) {
            return Err(CodegenError::backend(format!(
                "invalid function `{}`",
                function.get_name().to_string_lossy()
            )));
        }
        Ok(())
    }

    fn build_int(&mut self, value: i64) -> CodegenResult<Self::Value> {
        // Truncates to the low 32 bits.
        let value = self.context.i32_type().const_int(value as u64, true);
        Ok(LlvmValue::Int(value))
    }

    fn build_unit(&mut self) -> CodegenResult<Self::Value> {
        Ok(LlvmValue::Int(self.context.i32_type().const_zero()))
    }

    fn build_binop(
        &mut self,
        op: &str,
        lhs: Self::Value,
        rhs: Self::Value,
    ) -> CodegenResult<Self::Value> {
        let lhs = self.int_value(lhs)?;
        let rhs = self.int_value(rhs)?;

        let value = match op {
            "+" => self.builder.build_int_add(lhs, rhs, "addtmp"),
            "-" => self.builder.build_int_sub(lhs, rhs, "subtmp"),
            "*" => self.builder.build_int_mul(lhs, rhs, "multmp"),
            "/" => self.builder.build_int_signed_div(lhs, rhs, "divtmp"),
            _ => {
                return Err(CodegenError::UnknownOperator {
                    operator: op.to_string(),
                })
            }
        }
        .map_err(builder_error)?;

        Ok(LlvmValue::Int(value))
    }

    fn build_call(
        &mut self,
        callee: Self::Value,
        args: Vec<Self::Value>,
    ) -> CodegenResult<Self::Value> {
        let function = self.function_value(&callee)?;

        let expected = function.count_params() as usize;
        if expected != args.len() {
            return Err(CodegenError::UnexpectedArguments {
                expected,
                received: args.len(),
            });
        }

        let mut values: Vec<BasicMetadataValueEnum> = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.int_value(arg)?.into());
        }

        let call = self
            .builder
            .build_call(function, &values, "calltmp")
            .map_err(builder_error)?;

        call.try_as_basic_value()
            .left()
            .map(|value| LlvmValue::Int(value.into_int_value()))
            .ok_or_else(|| CodegenError::backend("call produced no value"))
    }
}
